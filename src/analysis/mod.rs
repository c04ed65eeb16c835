//! Per-team metrics and the classifications derived from them

/// Grouping teams by trend and spread
pub mod classification;
/// Trend, standard deviation and success rate reductions
pub mod metrics;
/// Mean completion rate and its chart
pub mod velocity;
