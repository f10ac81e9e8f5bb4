//! Search progress display driven by the solver's step counter

use crate::io::configuration::{PROGRESS_STEP_INTERVAL, PROGRESS_TICK_MS};
use crate::spatial::board::Board;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BUDGET_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {spinner} [{bar:30.cyan/blue}] {pos}/{len} steps {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("[{elapsed_precise}] {spinner} {pos} steps {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Reports search progress on stderr
///
/// Shows a bounded bar when the search has a step budget and a spinner
/// otherwise. Updates are throttled to every few hundred steps.
pub struct SearchProgress {
    bar: ProgressBar,
    last_reported: u64,
}

impl SearchProgress {
    /// Create a progress display for a search with an optional step budget
    pub fn new(step_budget: Option<u64>) -> Self {
        let bar = step_budget.map_or_else(
            || {
                let pb = ProgressBar::new_spinner();
                pb.set_style(SPINNER_STYLE.clone());
                pb
            },
            |budget| {
                let pb = ProgressBar::new(budget);
                pb.set_style(BUDGET_STYLE.clone());
                pb
            },
        );
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));

        Self {
            bar,
            last_reported: 0,
        }
    }

    /// Record the current step count and fill level
    pub fn update(&mut self, steps: u64, board: &Board) {
        if steps < self.last_reported + PROGRESS_STEP_INTERVAL {
            return;
        }
        self.last_reported = steps;
        self.bar.set_position(steps);
        self.bar
            .set_message(format!("{}/{} placed", board.filled(), board.cell_count()));
    }

    /// Steps last pushed to the display
    pub const fn last_reported(&self) -> u64 {
        self.last_reported
    }

    /// Stop the display, leaving a final message
    pub fn finish(&self, steps: u64, message: &str) {
        self.bar.set_position(steps);
        self.bar.finish_with_message(message.to_string());
    }
}
