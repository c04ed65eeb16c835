//! Command-line interface and the load, analyze and render sequence

use crate::analysis::classification::{TeamClassification, classify_teams};
use crate::analysis::metrics::{TeamMetrics, calculate_metrics, success_rate};
use crate::analysis::velocity::calculate_velocity;
use crate::io::configuration::{
    CHART_COUNT, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR, SUCCESS_THRESHOLD, VELOCITY_CHART_FILE,
};
use crate::io::error::Result;
use crate::io::loader::load_table;
use crate::io::progress::ChartProgress;
use crate::io::visualization::visualize_data;
use crate::table::TeamSeries;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "sprint-insights")]
#[command(
    version,
    about = "Summarize team sprint completion rates and chart them as JPEG images"
)]
/// Command-line arguments; every one is optional
pub struct Cli {
    /// CSV table with a header of sprint periods and a leading team column
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,

    /// Directory the chart images are written to
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Hide the progress bar and only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is not set
    pub const fn default_log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }
}

/// Everything a successful run derived from the table
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsReport {
    /// Per-team trend and standard deviation
    pub metrics: TeamMetrics,
    /// Improving, declining and consistent groups plus spread extremes
    pub classification: TeamClassification,
    /// Per-team mean completion rate
    pub velocity: TeamSeries,
    /// Per-team percentage of successful sprints
    pub success_rate: TeamSeries,
    /// Chart files written, in render order
    pub charts: Vec<PathBuf>,
}

/// Runs load, metrics, classification, visualization and velocity in order
pub struct InsightsRunner {
    cli: Cli,
}

impl InsightsRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Arguments this runner was built from
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Execute the full sequence
    ///
    /// A table that cannot be loaded is logged and yields `Ok(None)`; no
    /// further work is done in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if a chart cannot be rendered or written
    pub fn run(&self) -> Result<Option<InsightsReport>> {
        let table = match load_table(&self.cli.input) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("{e}");
                return Ok(None);
            }
        };
        tracing::info!(
            teams = table.team_count(),
            periods = table.period_count(),
            "analyzing {}",
            self.cli.input.display()
        );

        let metrics = calculate_metrics(&table)?;
        let classification = classify_teams(&metrics.trend, &metrics.std_dev);
        log_classification(&classification);

        let progress = if self.cli.should_show_progress() {
            ChartProgress::new(CHART_COUNT)
        } else {
            ChartProgress::hidden()
        };

        let mut charts = visualize_data(&table, &metrics.std_dev, &self.cli.output_dir, &progress)?;
        let velocity = calculate_velocity(&table, &self.cli.output_dir, &progress)?;
        charts.push(self.cli.output_dir.join(VELOCITY_CHART_FILE));
        progress.finish();

        tracing::info!(
            count = charts.len(),
            "charts written to {}",
            self.cli.output_dir.display()
        );

        Ok(Some(InsightsReport {
            success_rate: success_rate(&table, SUCCESS_THRESHOLD)?,
            metrics,
            classification,
            velocity,
            charts,
        }))
    }
}

fn log_classification(classification: &TeamClassification) {
    tracing::info!("improving teams: {:?}", classification.improving_teams);
    tracing::info!("declining teams: {:?}", classification.declining_teams);
    tracing::info!("consistent teams: {:?}", classification.consistent_teams);
    if let Some(team) = &classification.most_consistent_team {
        tracing::info!("most consistent team: {team}");
    }
    if let Some(team) = &classification.least_consistent_team {
        tracing::info!("least consistent team: {team}");
    }
}
