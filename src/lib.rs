//! Descriptive statistics over team sprint completion rates
//!
//! A table of completion rates (one row per team, one column per sprint
//! period) is loaded from CSV, reduced to per-team trend, spread, velocity
//! and success rate, classified, and rendered as JPEG bar and box charts.

#![forbid(unsafe_code)]

/// Trend, spread, velocity and team classification
pub mod analysis;
/// Raster bar and box chart rendering
pub mod chart;
/// Input/output operations, configuration and error handling
pub mod io;
/// Quantiles, extremes and axis scaling
pub mod math;
/// Sprint table and per-team series
pub mod table;

pub use io::error::{InsightsError, LoadError, Result};
