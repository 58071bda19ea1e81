//! Command-line interface for stepping a mosaic and printing the result

use crate::algorithm::executor::{Mosaic, MosaicConfig, StepOutcome};
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_MAX_STEPS, DEFAULT_ROWS, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::progress::StepProgress;
use crate::io::render::{render_option_counts, render_text};
use crate::io::tileset::{builtin_tileset, load_tileset};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(
    author,
    version,
    about = "Fill a toroidal grid with edge-matching tiles one step at a time"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Tileset JSON file (built-in pipe tileset when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub tileset: Option<PathBuf>,

    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum steps to execute
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_STEPS)]
    pub steps: usize,

    /// Stop at the first completed grid instead of clearing it
    #[arg(short, long)]
    pub until_complete: bool,

    /// Also print the option count of every cell
    #[arg(short = 'o', long)]
    pub show_options: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Session configuration derived from the arguments
    pub const fn mosaic_config(&self) -> MosaicConfig {
        MosaicConfig {
            cols: self.cols,
            rows: self.rows,
            seed: self.seed,
            reset_on_completion: !self.until_complete,
        }
    }
}

/// Summary of a finished run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Steps actually executed
    pub steps: usize,
    /// Whether the run stopped on a completed grid
    pub completed: bool,
    /// Rendered final grid
    pub rendering: String,
}

/// Drives a mosaic session according to CLI arguments
pub struct Runner {
    cli: Cli,
    progress: Option<StepProgress>,
}

impl Runner {
    /// Create a runner with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Load the tileset, execute the steps, and render the final grid
    ///
    /// # Errors
    ///
    /// Returns an error if the tileset cannot be loaded or the grid
    /// dimensions are invalid
    pub fn run(&mut self) -> Result<RunReport> {
        let tileset = match &self.cli.tileset {
            Some(path) => load_tileset(path)?,
            None => builtin_tileset()?,
        };

        let mut mosaic = Mosaic::new(self.cli.mosaic_config(), tileset)?;

        if self.cli.should_show_progress() {
            self.progress = Some(StepProgress::new(self.cli.steps, mosaic.grid().len()));
        }

        let mut completed = false;
        for step in 1..=self.cli.steps {
            let outcome = mosaic.execute_step();

            if let Some(ref progress) = self.progress {
                progress.update(step, mosaic.grid().collapsed_count(), &mosaic.stats);
            }

            if self.cli.until_complete && outcome == StepOutcome::Completed {
                completed = true;
                break;
            }
        }

        if let Some(ref progress) = self.progress {
            progress.finish(mosaic.grid().collapsed_count(), &mosaic.stats);
        }

        let options = mosaic.options();
        let mut rendering = render_text(mosaic.grid(), &options, mosaic.tileset());
        if self.cli.show_options {
            rendering.push('\n');
            rendering.push_str(&render_option_counts(mosaic.grid(), &options));
        }

        Ok(RunReport {
            steps: mosaic.iteration,
            completed,
            rendering,
        })
    }
}
