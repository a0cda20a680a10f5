//! Iteration progress for one or more names, with an overall bar for batches

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for single and batch runs
///
/// Shows one iteration bar for the name being generated and, when more than
/// one name is queued, an extra bar counting finished names.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    name_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static ITERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.magenta/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Names: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            name_bar: None,
        }
    }

    /// Prepare the overall bar when several names are queued
    pub fn initialize(&mut self, name_count: usize) {
        if name_count > 1 {
            let batch_bar = ProgressBar::new(name_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start the iteration bar for a name
    pub fn start_name(&mut self, name: &str, iterations: usize) {
        if let Some(previous) = self.name_bar.take() {
            previous.finish_and_clear();
        }

        let bar = ProgressBar::new(iterations as u64);
        bar.set_style(ITERATION_STYLE.clone());
        bar.set_prefix(name.to_string());
        self.name_bar = Some(self.multi_progress.add(bar));
    }

    /// Report completed rounds for the current name
    pub fn update_iteration(&self, iteration: usize) {
        if let Some(ref bar) = self.name_bar {
            bar.set_position(iteration as u64);
        }
    }

    /// Mark the current name as finished
    pub fn complete_name(&mut self) {
        if let Some(bar) = self.name_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All names processed");
        }
        let _ = self.multi_progress.clear();
    }
}
