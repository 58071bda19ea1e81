//! Tile definitions and the read-only tileset
//!
//! A tile carries four edge signatures in `[right, top, left, bottom]` order.
//! Two tiles may sit side by side when the edge of one, read backwards,
//! equals the facing edge of the other.

use crate::io::error::{MosaicError, Result};
use crate::spatial::neighbors::Direction;

/// A tileset entry with four directional edge signatures
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    edges: [String; 4],
    glyph: Option<char>,
}

impl Tile {
    /// Create a tile from its edges in `[right, top, left, bottom]` order
    pub const fn new(edges: [String; 4]) -> Self {
        Self { edges, glyph: None }
    }

    /// Create a tile whose four edges share one signature
    pub fn uniform(edge: &str) -> Self {
        Self::new([
            edge.to_string(),
            edge.to_string(),
            edge.to_string(),
            edge.to_string(),
        ])
    }

    /// Attach a display glyph used by the text renderer
    #[must_use]
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Display glyph, if one was assigned
    pub const fn glyph(&self) -> Option<char> {
        self.glyph
    }

    /// All edge signatures in edge order
    pub const fn edges(&self) -> &[String; 4] {
        &self.edges
    }

    /// Edge signature facing the given direction
    pub fn edge(&self, direction: Direction) -> &str {
        self.edges
            .get(direction.index())
            .map_or("", String::as_str)
    }

    /// Edge signature facing the given direction with its symbols reversed
    pub fn reversed_edge(&self, direction: Direction) -> String {
        self.edge(direction).chars().rev().collect()
    }

    /// Whether `other` may sit next to this tile in `direction`
    ///
    /// Exact equality between this tile's reversed edge and the facing edge
    /// of `other`; there is no partial matching.
    pub fn matches(&self, other: &Self, direction: Direction) -> bool {
        other.edge(direction.opposite()) == self.reversed_edge(direction)
    }
}

/// Fixed, ordered collection of tiles
///
/// A tile's identity is its position in the set. The solver only ever reads
/// it.
#[derive(Clone, Debug)]
pub struct Tileset {
    tiles: Vec<Tile>,
}

impl Tileset {
    /// Build a tileset from an ordered list of tiles
    ///
    /// # Errors
    ///
    /// Returns `MosaicError::EmptyTileset` if `tiles` is empty
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(MosaicError::EmptyTileset);
        }
        Ok(Self { tiles })
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false, a tileset is never empty
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile with the given identity
    pub fn get(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Iterate tiles in identity order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// All tile identities, `0..len`
    pub const fn identities(&self) -> std::ops::Range<usize> {
        0..self.tiles.len()
    }
}

impl<'a> IntoIterator for &'a Tileset {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
