//! Numeric helpers shared by metrics and charts

/// Axis scaling and tick placement
pub mod scale;
/// Quantiles, extremes and box-plot summaries
pub mod statistics;
