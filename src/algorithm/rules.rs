use crate::algorithm::option_set::OptionSet;
use crate::spatial::{Direction, Tileset};

/// Precomputed edge compatibility between every pair of tiles
///
/// For tile `t` and direction `d`, stores the set of tiles whose edge facing
/// `d.opposite()` equals `t`'s `d` edge reversed. Built once per tileset so
/// propagation reduces to bitset intersection.
#[derive(Clone, Debug)]
pub struct AdjacencyRules {
    tile_count: usize,
    /// Indexing: `tile * 4 + direction.index()`
    allowed: Vec<OptionSet>,
}

impl AdjacencyRules {
    /// Derive the rules from a tileset's edge signatures
    pub fn from_tileset(tileset: &Tileset) -> Self {
        let tile_count = tileset.len();
        let mut allowed = Vec::with_capacity(tile_count * Direction::ALL.len());

        for tile in tileset {
            for direction in Direction::ALL {
                let reversed = tile.reversed_edge(direction);
                let mut compatible = OptionSet::empty(tile_count);
                for (candidate_id, candidate) in tileset.iter().enumerate() {
                    if candidate.edge(direction.opposite()) == reversed {
                        compatible.insert(candidate_id);
                    }
                }
                allowed.push(compatible);
            }
        }

        Self {
            tile_count,
            allowed,
        }
    }

    /// Number of tiles the rules cover
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Tiles allowed next to `tile` in `direction`, `None` for an unknown tile
    pub fn compatible(&self, tile: usize, direction: Direction) -> Option<&OptionSet> {
        if tile >= self.tile_count {
            return None;
        }
        self.allowed.get(tile * Direction::ALL.len() + direction.index())
    }

    /// Whether `neighbor` may sit next to `tile` in `direction`
    pub fn check(&self, tile: usize, neighbor: usize, direction: Direction) -> bool {
        self.compatible(tile, direction)
            .is_some_and(|set| set.contains(neighbor))
    }
}
