//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Toroidal neighbor geometry
//! - Grid snapshots
//! - Tile and tileset definitions

/// Grid snapshot management
pub mod grid;
/// Cardinal directions and toroidal neighbor lookup
pub mod neighbors;
/// Tile edge signatures and the tileset
pub mod tiles;

pub use grid::Grid;
pub use neighbors::Direction;
pub use tiles::{Tile, Tileset};
