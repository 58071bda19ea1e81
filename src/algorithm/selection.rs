use crate::algorithm::option_set::OptionSet;
use crate::algorithm::propagation::OptionSets;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible uniform choices
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly pick an index in `0..len`, `None` when `len` is zero
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// Smallest nonzero option-set size across all cells
///
/// Collapsed cells and contradictions both have empty sets and are skipped.
/// Returns `None` when no cell has any option left.
pub fn least_options(options: &OptionSets) -> Option<usize> {
    options
        .iter()
        .map(OptionSet::count)
        .filter(|&count| count > 0)
        .min()
}

/// Indices of every cell tied for the fewest remaining options
///
/// Ascending index order. Empty when no cell has any option left.
pub fn candidate_cells(options: &OptionSets) -> Vec<usize> {
    let Some(least) = least_options(options) else {
        return Vec::new();
    };

    options
        .iter()
        .enumerate()
        .filter(|(_, set)| set.count() == least)
        .map(|(index, _)| index)
        .collect()
}

/// Uniformly pick one of the most constrained cells
pub fn select_cell(options: &OptionSets, selector: &mut RandomSelector) -> Option<usize> {
    let candidates = candidate_cells(options);
    selector
        .choose_index(candidates.len())
        .and_then(|pick| candidates.get(pick).copied())
}

/// Uniformly pick one tile identity from an option set
pub fn select_tile(options: &OptionSet, selector: &mut RandomSelector) -> Option<usize> {
    selector
        .choose_index(options.count())
        .and_then(|pick| options.nth(pick))
}
