//! Writing the standard deviation, distribution and success rate charts

use crate::analysis::metrics::success_rate;
use crate::chart::{BarChart, BoxChart, ChartLabels};
use crate::io::configuration::{
    DISTRIBUTION_CHART_FILE, STD_DEV_CHART_FILE, SUCCESS_RATE_CHART_FILE, SUCCESS_THRESHOLD,
};
use crate::io::error::Result;
use crate::io::image::export_chart_as_jpeg;
use crate::io::progress::ChartProgress;
use crate::table::{SprintTable, TeamSeries};
use std::path::{Path, PathBuf};

/// Render `series` as an annotated bar chart and write it to `output_path`
///
/// # Errors
///
/// Returns an error if the series is empty or the image cannot be written
pub fn create_bar_plot(series: &TeamSeries, labels: &ChartLabels, output_path: &Path) -> Result<()> {
    let image = BarChart::new(labels.clone()).render(series)?;
    export_chart_as_jpeg(&image, output_path)?;
    tracing::debug!(path = %output_path.display(), "wrote bar chart");
    Ok(())
}

/// Write the three table charts into `output_dir` and return their paths
///
/// # Errors
///
/// Returns an error if any chart cannot be rendered or written
pub fn visualize_data(
    table: &SprintTable,
    std_dev: &TeamSeries,
    output_dir: &Path,
    progress: &ChartProgress,
) -> Result<Vec<PathBuf>> {
    let std_dev_path = output_dir.join(STD_DEV_CHART_FILE);
    progress.start_chart(STD_DEV_CHART_FILE);
    create_bar_plot(
        std_dev,
        &ChartLabels::new(
            "Team",
            "Standard Deviation of Completion Rate",
            "Standard Deviation of Task Completion Rates",
        ),
        &std_dev_path,
    )?;
    progress.complete_chart();

    let distribution_path = output_dir.join(DISTRIBUTION_CHART_FILE);
    progress.start_chart(DISTRIBUTION_CHART_FILE);
    let distribution = BoxChart::new(ChartLabels::new(
        "Completion Rate",
        "",
        "Distribution of Task Completion Rates for Each Team",
    ))
    .render(table)?;
    export_chart_as_jpeg(&distribution, &distribution_path)?;
    tracing::debug!(path = %distribution_path.display(), "wrote distribution chart");
    progress.complete_chart();

    let success_path = output_dir.join(SUCCESS_RATE_CHART_FILE);
    progress.start_chart(SUCCESS_RATE_CHART_FILE);
    create_bar_plot(
        &success_rate(table, SUCCESS_THRESHOLD)?,
        &ChartLabels::new(
            "Team",
            "Sprint Goal Success Rate (%)",
            "Sprint Goal Success Rate for Each Team",
        ),
        &success_path,
    )?;
    progress.complete_chart();

    Ok(vec![std_dev_path, distribution_path, success_path])
}
