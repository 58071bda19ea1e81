//! Edge-matching tile mosaics on a toroidal grid
//!
//! A constraint solver in the style of wave function collapse: every step
//! derives the tiles still allowed in each empty cell from its collapsed
//! neighbors, collapses one of the most constrained cells to a random
//! allowed tile, and clears the grid once nothing is left to choose.

#![forbid(unsafe_code)]

/// Option sets, propagation, selection and stepping
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid, neighbor geometry and tiles
pub mod spatial;

pub use algorithm::executor::{Mosaic, MosaicConfig, StepOutcome, step, step_with_rules};
pub use io::error::{MosaicError, Result};
