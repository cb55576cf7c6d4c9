//! Progress display while solving every available day of a year

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates the progress bar for a batch of puzzles
///
/// Answers printed while the bar is visible are routed through
/// [`ProgressManager::suspend`] so they do not interleave with redraws.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: Vec<(String, Duration)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            completed: Vec::new(),
        }
    }

    /// Create the bar for `puzzle_count` puzzles labelled with `prefix`
    pub fn initialize(&mut self, puzzle_count: usize, prefix: &str) {
        let bar = ProgressBar::new(puzzle_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_prefix(prefix.to_string());
        self.bar = Some(bar);
        self.completed.clear();
    }

    /// Show which puzzle is being solved
    pub fn start_puzzle(&self, label: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(label.to_string());
        }
    }

    /// Record a solved or skipped puzzle and advance the bar
    pub fn complete_puzzle(&mut self, label: &str, elapsed: Duration) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
        self.completed.push((label.to_string(), elapsed));
    }

    /// Run `f` with the bar hidden
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        match self.bar {
            Some(ref bar) => bar.suspend(f),
            None => f(),
        }
    }

    /// Puzzles completed so far with their solve times
    pub fn completed(&self) -> &[(String, Duration)] {
        &self.completed
    }

    /// Total time spent in completed puzzles
    pub fn total_elapsed(&self) -> Duration {
        self.completed.iter().map(|(_, elapsed)| *elapsed).sum()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
