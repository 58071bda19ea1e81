/// Step outcomes, the pure step function and the stepping session
pub mod executor;
/// Bitset of tile identities still allowed for a cell
pub mod option_set;
/// Option-set computation and single-hop propagation
pub mod propagation;
/// Precomputed edge compatibility between tiles
pub mod rules;
/// Most-constrained cell selection and uniform tile choice
pub mod selection;
