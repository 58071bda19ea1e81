//! Tests for command-line parsing and the run driver

#[cfg(test)]
mod tests {
    use clap::Parser;
    use mosaic::MosaicError;
    use mosaic::io::cli::{Cli, Runner};
    use mosaic::io::configuration::{DEFAULT_COLS, DEFAULT_MAX_STEPS, DEFAULT_ROWS, DEFAULT_SEED};
    use std::io::Write;
    use std::path::PathBuf;

    // Tests CLI parsing with no arguments uses the defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.tileset, None);
        assert_eq!(cli.cols, DEFAULT_COLS);
        assert_eq!(cli.rows, DEFAULT_ROWS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.steps, DEFAULT_MAX_STEPS);
        assert!(!cli.until_complete);
        assert!(!cli.show_options);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "--tileset",
            "tiles.json",
            "--cols",
            "7",
            "--rows",
            "5",
            "--seed",
            "123",
            "--steps",
            "500",
            "--until-complete",
            "--show-options",
            "--quiet",
        ]);

        assert_eq!(cli.tileset, Some(PathBuf::from("tiles.json")));
        assert_eq!(cli.cols, 7);
        assert_eq!(cli.rows, 5);
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.steps, 500);
        assert!(cli.until_complete);
        assert!(cli.show_options);
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "-c", "3", "-r", "2", "-s", "9", "-n", "4", "-u", "-q"]);

        assert_eq!(cli.cols, 3);
        assert_eq!(cli.rows, 2);
        assert_eq!(cli.seed, 9);
        assert_eq!(cli.steps, 4);
        assert!(cli.until_complete);
        assert!(cli.quiet);
    }

    // Tests --until-complete turns off reset on completion
    // Verified by passing the flag through without negation
    #[test]
    fn test_mosaic_config_from_cli() {
        let cli = Cli::parse_from(["program", "-c", "3", "-r", "2", "-s", "9"]);
        let config = cli.mosaic_config();
        assert_eq!((config.cols, config.rows, config.seed), (3, 2, 9));
        assert!(config.reset_on_completion);

        let cli = Cli::parse_from(["program", "--until-complete"]);
        assert!(!cli.mosaic_config().reset_on_completion);
    }

    // Tests a run with the built-in tileset stops on the completed grid
    #[test]
    fn test_run_until_complete() {
        let cli = Cli::parse_from(["program", "-c", "4", "-r", "3", "-n", "100", "-u", "-q"]);
        let report = Runner::new(cli).run().expect("run succeeds");

        assert!(report.completed);
        assert_eq!(report.steps, 13);
        let lines: Vec<&str> = report.rendering.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 4));
        assert!(!report.rendering.chars().any(|c| c.is_ascii_digit()));
    }

    // Tests a run without --until-complete executes every step
    #[test]
    fn test_run_fixed_steps_with_options() {
        let cli = Cli::parse_from(["program", "-c", "3", "-r", "3", "-n", "5", "-o", "-q"]);
        let report = Runner::new(cli).run().expect("run succeeds");

        assert!(!report.completed);
        assert_eq!(report.steps, 5);
        // Grid rows, a blank separator, then option-count rows
        assert_eq!(report.rendering.lines().count(), 7);
    }

    // Tests a tileset file is loaded and used
    #[test]
    fn test_run_with_tileset_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r##"{{"tiles": [{{"edges": ["A", "A", "A", "A"], "glyph": "#"}}]}}"##
        )
        .expect("write tileset");

        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", "-t", path.as_str(), "-c", "2", "-r", "2", "-u", "-q"]);
        let report = Runner::new(cli).run().expect("run succeeds");

        assert!(report.completed);
        assert_eq!(report.rendering, "##\n##\n");
    }

    // Tests a missing tileset file surfaces a file system error
    #[test]
    fn test_run_with_missing_tileset() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json").to_string_lossy().to_string();
        let cli = Cli::parse_from(["program", "-t", path.as_str(), "-q"]);

        assert!(matches!(
            Runner::new(cli).run(),
            Err(MosaicError::FileSystem { .. })
        ));
    }

    // Tests invalid dimensions are reported instead of panicking
    #[test]
    fn test_run_with_zero_columns() {
        let cli = Cli::parse_from(["program", "-c", "0", "-q"]);
        assert!(matches!(
            Runner::new(cli).run(),
            Err(MosaicError::InvalidParameter { parameter: "cols", .. })
        ));
    }
}
