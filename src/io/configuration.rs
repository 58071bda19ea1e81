//! Grid constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension along either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of grid columns
pub const DEFAULT_COLS: usize = 12;

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 8;

/// Default maximum steps before stopping
pub const DEFAULT_MAX_STEPS: usize = 1000;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Number of steps between progress message refreshes
pub const PROGRESS_REFRESH_STEPS: usize = 16;

// Text rendering
/// Placeholder shown for uncollapsed cells with more than nine options
pub const OVERFLOW_OPTIONS_GLYPH: char = '?';
