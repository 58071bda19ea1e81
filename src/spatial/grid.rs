//! Grid snapshots addressed by a single flat index
//!
//! Cell `i` sits at `row = i / cols`, `col = i % cols`. A cell is either
//! uncollapsed (`None`) or holds a tile identity. Snapshots are treated as
//! immutable: collapsing or clearing produces a new grid.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::neighbors::neighbor_indices;
use crate::spatial::tiles::Tileset;

/// Rectangular toroidal grid of collapsed and uncollapsed cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Option<usize>>,
}

impl Grid {
    /// Create a grid with every cell uncollapsed
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        validate_dimension("cols", cols)?;
        validate_dimension("rows", rows)?;

        Ok(Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        })
    }

    /// Restore a grid from a flat cell vector
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is invalid or `cells.len() != cols * rows`
    pub fn from_cells(cols: usize, rows: usize, cells: Vec<Option<usize>>) -> Result<Self> {
        validate_dimension("cols", cols)?;
        validate_dimension("rows", rows)?;

        if cells.len() != cols * rows {
            return Err(MosaicError::GridSizeMismatch {
                expected: cols * rows,
                actual: cells.len(),
            });
        }

        Ok(Self { cols, rows, cells })
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells, `cols * rows`
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a grid has at least one cell
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// State of a cell: `None` when out of range, `Some(None)` when uncollapsed
    pub fn cell(&self, index: usize) -> Option<Option<usize>> {
        self.cells.get(index).copied()
    }

    /// All cells in index order
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }

    /// Whether the cell holds a tile
    pub fn is_collapsed(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Some(_)))
    }

    /// Number of cells holding a tile
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether every cell holds a tile
    pub fn is_fully_collapsed(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Row and column of a flat index
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Flat index of a row and column, if both are in range
    pub const fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Toroidal neighbors of a cell as `[right, top, left, bottom]`
    pub const fn neighbors(&self, index: usize) -> [usize; 4] {
        neighbor_indices(index, self.cols, self.rows)
    }

    /// New snapshot with one additional collapsed cell
    ///
    /// An out-of-range index leaves the copy unchanged.
    #[must_use]
    pub fn with_collapsed(&self, index: usize, tile: usize) -> Self {
        let mut next = self.clone();
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = Some(tile);
        }
        next
    }

    /// New snapshot of the same size with every cell uncollapsed
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            cols: self.cols,
            rows: self.rows,
            cells: vec![None; self.cells.len()],
        }
    }

    /// Check that every collapsed identity exists in the tileset
    ///
    /// # Errors
    ///
    /// Returns `MosaicError::InvalidTileIndex` for the first identity outside the tileset
    pub fn validate_against(&self, tileset: &Tileset) -> Result<()> {
        match self.cells.iter().flatten().find(|&&id| id >= tileset.len()) {
            Some(&index) => Err(MosaicError::InvalidTileIndex {
                index,
                max_tiles: tileset.len(),
            }),
            None => Ok(()),
        }
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
