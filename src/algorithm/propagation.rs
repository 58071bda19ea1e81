//! Option-set computation and single-hop constraint propagation
//!
//! Option sets are derived from a grid snapshot on demand and never stored
//! across steps. Every collapsed cell narrows its uncollapsed neighbors once,
//! in index order. Shrinkage is not propagated further, so only direct
//! neighbors of collapsed cells are guaranteed consistent.

use crate::algorithm::option_set::OptionSet;
use crate::algorithm::rules::AdjacencyRules;
use crate::spatial::{Direction, Grid, Tileset};

/// One option set per grid cell, in cell index order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSets {
    sets: Vec<OptionSet>,
}

impl OptionSets {
    /// Option set of a cell
    pub fn get(&self, index: usize) -> Option<&OptionSet> {
        self.sets.get(index)
    }

    /// Number of cells covered
    pub const fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no cells are covered
    pub const fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate option sets in cell index order
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSet> {
        self.sets.iter()
    }

    /// Option-set size of every cell
    pub fn counts(&self) -> Vec<usize> {
        self.sets.iter().map(OptionSet::count).collect()
    }
}

impl<'a> IntoIterator for &'a OptionSets {
    type Item = &'a OptionSet;
    type IntoIter = std::slice::Iter<'a, OptionSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

impl From<Vec<OptionSet>> for OptionSets {
    fn from(sets: Vec<OptionSet>) -> Self {
        Self { sets }
    }
}

/// Compute the option set of every cell from the tileset's edge signatures
///
/// Convenience wrapper deriving `AdjacencyRules` on each call; callers that
/// step repeatedly should build the rules once and use
/// `compute_options_with_rules`.
pub fn compute_options(grid: &Grid, tileset: &Tileset) -> OptionSets {
    let rules = AdjacencyRules::from_tileset(tileset);
    compute_options_with_rules(grid, &rules)
}

/// Compute the option set of every cell using precomputed rules
///
/// Every cell starts with the full tileset. Each collapsed cell, in index
/// order, empties its own set and intersects each uncollapsed neighbor's set
/// with the tiles compatible in that direction. Cells left with zero options
/// are contradictions, not errors.
pub fn compute_options_with_rules(grid: &Grid, rules: &AdjacencyRules) -> OptionSets {
    let tile_count = rules.tile_count();
    let mut sets = vec![OptionSet::all(tile_count); grid.len()];

    for (index, cell) in grid.cells().iter().enumerate() {
        let Some(tile) = *cell else {
            continue;
        };

        if let Some(own) = sets.get_mut(index) {
            own.clear();
        }

        limit_neighbor_options(grid, rules, &mut sets, index, tile);
    }

    OptionSets { sets }
}

/// Narrow the uncollapsed neighbors of one collapsed cell
fn limit_neighbor_options(
    grid: &Grid,
    rules: &AdjacencyRules,
    sets: &mut [OptionSet],
    index: usize,
    tile: usize,
) {
    for (direction, neighbor) in Direction::ALL.into_iter().zip(grid.neighbors(index)) {
        if grid.is_collapsed(neighbor) {
            continue;
        }

        let (Some(allowed), Some(options)) =
            (rules.compatible(tile, direction), sets.get_mut(neighbor))
        else {
            continue;
        };

        options.intersect_with(allowed);
    }
}
