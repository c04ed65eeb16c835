//! In-memory sprint table and per-team value series

/// Per-team labeled value series
pub mod series;
/// Team-by-period completion rate table
pub mod sprint;

pub use series::TeamSeries;
pub use sprint::SprintTable;
