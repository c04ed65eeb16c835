//! Raster chart rendering for per-team statistics

/// Vertical bar chart of a per-team series
pub mod bar;
/// Horizontal box-and-whisker chart of a whole table
pub mod boxplot;
/// Drawing surface with bitmap text
pub mod canvas;
/// Titles, plot area and value axes
pub mod layout;
/// Qualitative team colors
pub mod palette;

pub use bar::BarChart;
pub use boxplot::BoxChart;
pub use layout::ChartLabels;
