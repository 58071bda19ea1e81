//! Tileset loading from JSON documents and the built-in box-drawing set
//!
//! Document layout:
//!
//! ```json
//! { "tiles": [ { "edges": ["ABA", "AAA", "ABA", "AAA"], "glyph": "─" } ] }
//! ```
//!
//! Edges are listed as `[right, top, left, bottom]`; `glyph` is optional.

use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::{Tile, Tileset};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug)]
struct TileModel {
    edges: [String; 4],
    #[serde(default)]
    glyph: Option<String>,
}

#[derive(Deserialize, Debug)]
struct TilesetModel {
    tiles: Vec<TileModel>,
}

impl TileModel {
    fn into_tile(self, id: usize) -> Result<Tile> {
        let tile = Tile::new(self.edges);
        let Some(glyph) = self.glyph else {
            return Ok(tile);
        };

        let mut chars = glyph.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Ok(tile.with_glyph(symbol)),
            _ => Err(invalid_parameter(
                "glyph",
                &format!("tile {id}: {glyph:?}"),
                &"must be exactly one character",
            )),
        }
    }
}

/// Parse a tileset from a JSON string
///
/// # Errors
///
/// Returns an error if the document is malformed, a glyph is not a single
/// character, or the tile list is empty
pub fn parse_tileset(document: &str, origin: &Path) -> Result<Tileset> {
    let model: TilesetModel =
        serde_json::from_str(document).map_err(|source| MosaicError::TilesetParse {
            path: origin.to_path_buf(),
            source,
        })?;

    let tiles = model
        .tiles
        .into_iter()
        .enumerate()
        .map(|(id, tile)| tile.into_tile(id))
        .collect::<Result<Vec<_>>>()?;

    Tileset::new(tiles)
}

/// Load a tileset from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_tileset(path: &Path) -> Result<Tileset> {
    let document = fs::read_to_string(path).map_err(|source| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tileset",
        source,
    })?;
    parse_tileset(&document, path)
}

/// Pipe tiles drawn with box-drawing characters
///
/// `A` marks an empty edge segment and `B` a pipe, so every edge is a
/// palindrome of three symbols. All sixteen combinations of pipe and empty
/// edges are present, so direct-neighbor constraints can always be met.
///
/// # Errors
///
/// Propagates tileset validation, which the fixed tile list always passes
pub fn builtin_tileset() -> Result<Tileset> {
    const EMPTY: &str = "AAA";
    const PIPE: &str = "ABA";

    let tile = |right: bool, top: bool, left: bool, bottom: bool, glyph: char| {
        let edge = |connected: bool| (if connected { PIPE } else { EMPTY }).to_string();
        Tile::new([edge(right), edge(top), edge(left), edge(bottom)]).with_glyph(glyph)
    };

    let tiles = vec![
        tile(false, false, false, false, ' '),
        tile(true, false, true, false, '─'),
        tile(false, true, false, true, '│'),
        tile(true, true, true, true, '┼'),
        tile(true, false, true, true, '┬'),
        tile(true, true, true, false, '┴'),
        tile(true, true, false, true, '├'),
        tile(false, true, true, true, '┤'),
        tile(true, true, false, false, '└'),
        tile(true, false, false, true, '┌'),
        tile(false, false, true, true, '┐'),
        tile(false, true, true, false, '┘'),
        tile(true, false, false, false, '╶'),
        tile(false, true, false, false, '╵'),
        tile(false, false, true, false, '╴'),
        tile(false, false, false, true, '╷'),
    ];

    Tileset::new(tiles)
}
