//! Tests for configuration constants and defaults

#[cfg(test)]
mod tests {
    use mosaic::io::configuration::{
        DEFAULT_COLS, DEFAULT_MAX_STEPS, DEFAULT_ROWS, DEFAULT_SEED, MAX_GRID_DIMENSION,
        OVERFLOW_OPTIONS_GLYPH, PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_STEPS,
    };

    // Tests maximum grid dimension value
    // Verified by reducing dimension limit
    #[test]
    fn test_max_grid_dimension() {
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
    }

    // Tests default seed is fixed
    // Verified by changing seed value
    #[test]
    fn test_default_seed_is_reproducible() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests default grid fits within the dimension limit
    #[test]
    fn test_default_grid_dimensions() {
        assert_eq!((DEFAULT_COLS, DEFAULT_ROWS), (12, 8));
        assert!(DEFAULT_COLS <= MAX_GRID_DIMENSION);
        assert!(DEFAULT_ROWS <= MAX_GRID_DIMENSION);
    }

    // Tests default step budget covers at least one full default grid
    #[test]
    fn test_default_steps_cover_grid() {
        assert_eq!(DEFAULT_MAX_STEPS, 1000);
        assert!(DEFAULT_MAX_STEPS > DEFAULT_COLS * DEFAULT_ROWS);
    }

    #[test]
    fn test_progress_settings() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
        assert!(PROGRESS_REFRESH_STEPS > 0);
    }

    // Tests the overflow glyph cannot be mistaken for a digit
    #[test]
    fn test_overflow_glyph_is_not_a_digit() {
        assert!(!OVERFLOW_OPTIONS_GLYPH.is_ascii_digit());
    }
}
