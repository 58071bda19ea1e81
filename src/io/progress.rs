//! Step progress display for a generation run

use crate::algorithm::executor::StepStats;
use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_STEPS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the steps of one run
///
/// Shows steps taken against the step budget, with the collapsed cell count
/// and reset total as the message.
pub struct StepProgress {
    bar: ProgressBar,
    cell_count: usize,
}

impl StepProgress {
    /// Create a progress bar for `max_steps` steps over `cell_count` cells
    pub fn new(max_steps: usize, cell_count: usize) -> Self {
        let bar = ProgressBar::new(max_steps as u64);
        bar.set_style(STEP_STYLE.clone());
        Self { bar, cell_count }
    }

    /// Report a finished step
    ///
    /// The message is refreshed every `PROGRESS_REFRESH_STEPS` steps.
    pub fn update(&self, step: usize, collapsed: usize, stats: &StepStats) {
        self.bar.set_position(step as u64);
        if step % PROGRESS_REFRESH_STEPS == 0 {
            self.bar.set_message(Self::message(collapsed, self.cell_count, stats));
        }
    }

    /// Finish the bar with a final summary
    ///
    /// A run that stops early keeps the steps actually taken as its total.
    pub fn finish(&self, collapsed: usize, stats: &StepStats) {
        self.bar.set_length(self.bar.position());
        self.bar
            .finish_with_message(Self::message(collapsed, self.cell_count, stats));
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Current bar length, the step budget until finished
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Summary line used as the bar message
    pub fn message(collapsed: usize, cell_count: usize, stats: &StepStats) -> String {
        format!(
            "cells {collapsed}/{cell_count}, resets {} ({} complete, {} stuck)",
            stats.resets, stats.completions, stats.contradictions
        )
    }
}
