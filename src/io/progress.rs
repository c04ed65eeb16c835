//! Progress display while charts are rendered

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};

/// Single progress bar counting written charts
///
/// A hidden bar accepts the same calls and draws nothing, so callers never
/// branch on whether progress is shown.
pub struct ChartProgress {
    bar: ProgressBar,
}

impl ChartProgress {
    /// Visible bar expecting `chart_count` charts
    pub fn new(chart_count: usize) -> Self {
        let bar = ProgressBar::new(chart_count as u64);
        bar.set_style(Self::style());
        Self { bar }
    }

    /// Bar that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show which chart is being rendered
    pub fn start_chart(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Count one chart as written
    pub fn complete_chart(&self) {
        self.bar.inc(1);
    }

    /// Number of charts counted so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template(&format!(
                "[{{elapsed_precise}}] Charts: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ")
    }
}
