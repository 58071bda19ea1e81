//! Cardinal directions and toroidal neighbor lookup
//!
//! Neighbor order is fixed as `[right, top, left, bottom]`, matching the
//! order of edge signatures on a tile. Both axes wrap around.

/// One of the four cardinal directions, in tile edge order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Positive column direction
    Right,
    /// Negative row direction
    Top,
    /// Negative column direction
    Left,
    /// Positive row direction
    Bottom,
}

impl Direction {
    /// All directions in edge order
    pub const ALL: [Self; 4] = [Self::Right, Self::Top, Self::Left, Self::Bottom];

    /// Position of this direction in edge order
    pub const fn index(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Top => 1,
            Self::Left => 2,
            Self::Bottom => 3,
        }
    }

    /// Direction at the given edge-order position, taken modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Right,
            1 => Self::Top,
            2 => Self::Left,
            _ => Self::Bottom,
        }
    }

    /// The direction pointing back, `(d + 2) mod 4`
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

/// Neighbor indices of a cell as `[right, top, left, bottom]`
///
/// Left and right wrap within the row; top and bottom wrap across the whole
/// grid. `index` must lie in `[0, cols * rows)` and both dimensions must be
/// nonzero, which `Grid` guarantees.
pub const fn neighbor_indices(index: usize, cols: usize, rows: usize) -> [usize; 4] {
    let row_offset = (index / cols) * cols;
    let right = (index + 1) % cols + row_offset;
    let left = (index + cols - 1) % cols + row_offset;

    let cell_count = rows * cols;
    let bottom = (index + cols) % cell_count;
    // Add the full count before subtracting to stay unsigned
    let top = (index + cell_count - cols) % cell_count;

    [right, top, left, bottom]
}

/// Neighbor index of a cell in a single direction
pub const fn neighbor(index: usize, direction: Direction, cols: usize, rows: usize) -> usize {
    let [right, top, left, bottom] = neighbor_indices(index, cols, rows);
    match direction {
        Direction::Right => right,
        Direction::Top => top,
        Direction::Left => left,
        Direction::Bottom => bottom,
    }
}
