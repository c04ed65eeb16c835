//! Velocity: each team's mean completion rate

use crate::analysis::metrics::{per_team, row_mean};
use crate::chart::ChartLabels;
use crate::io::configuration::VELOCITY_CHART_FILE;
use crate::io::error::Result;
use crate::io::progress::ChartProgress;
use crate::io::visualization::create_bar_plot;
use crate::table::{SprintTable, TeamSeries};
use std::path::Path;

/// Mean completion rate of every team across all periods
///
/// # Errors
///
/// Returns an error if the derived series cannot be built from the table
pub fn compute_velocity(table: &SprintTable) -> Result<TeamSeries> {
    per_team(table, row_mean)
}

/// Compute velocity and write its bar chart into `output_dir`
///
/// # Errors
///
/// Returns an error if the chart cannot be rendered or written
pub fn calculate_velocity(
    table: &SprintTable,
    output_dir: &Path,
    progress: &ChartProgress,
) -> Result<TeamSeries> {
    let velocity = compute_velocity(table)?;
    progress.start_chart(VELOCITY_CHART_FILE);
    create_bar_plot(
        &velocity,
        &ChartLabels::new(
            "Team",
            "Velocity (average completion rate)",
            "Velocity for Each Team",
        ),
        &output_dir.join(VELOCITY_CHART_FILE),
    )?;
    progress.complete_chart();
    Ok(velocity)
}
