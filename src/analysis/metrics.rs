//! Row-wise reductions over the sprint table

use crate::io::error::{Result, invalid_parameter};
use crate::table::{SprintTable, TeamSeries};
use ndarray::{Array1, ArrayView1};

/// Per-team trend and spread of completion rates
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMetrics {
    /// Last period's rate minus the first period's rate
    pub trend: TeamSeries,
    /// Sample standard deviation (N - 1 divisor) across the recorded periods
    pub std_dev: TeamSeries,
}

/// Apply `reduce` to every team's rates, keeping table order
///
/// # Errors
///
/// Returns an error if the reduced values cannot be paired with the team
/// labels
pub fn per_team(
    table: &SprintTable,
    reduce: impl Fn(ArrayView1<'_, f64>) -> f64,
) -> Result<TeamSeries> {
    let values: Array1<f64> = table.rows().map(|(_, rates)| reduce(rates)).collect();
    TeamSeries::new(table.teams().to_vec(), values)
}

/// Last value minus first value of a row
pub fn row_trend(rates: ArrayView1<'_, f64>) -> f64 {
    let first = rates.get(0).copied().unwrap_or(f64::NAN);
    let last = rates
        .len()
        .checked_sub(1)
        .and_then(|index| rates.get(index))
        .copied()
        .unwrap_or(f64::NAN);
    last - first
}

/// Values of a row that are not NaN, in period order
pub fn present_rates(rates: ArrayView1<'_, f64>) -> Array1<f64> {
    rates.iter().copied().filter(|rate| !rate.is_nan()).collect()
}

/// Sample standard deviation of a row's non-NaN values; NaN when fewer than
/// two remain
pub fn row_std_dev(rates: ArrayView1<'_, f64>) -> f64 {
    let present = present_rates(rates);
    if present.len() < 2 {
        return f64::NAN;
    }
    present.std(1.0)
}

/// Arithmetic mean of a row's non-NaN values; NaN when none remain
pub fn row_mean(rates: ArrayView1<'_, f64>) -> f64 {
    present_rates(rates).mean().unwrap_or(f64::NAN)
}

/// Percentage of a row's values at or above `threshold`
///
/// Missing (NaN) values count as periods that missed the threshold.
pub fn row_success_rate(rates: ArrayView1<'_, f64>, threshold: f64) -> f64 {
    if rates.is_empty() {
        return f64::NAN;
    }
    let hits = rates.iter().filter(|&&rate| rate >= threshold).count();
    hits as f64 / rates.len() as f64 * 100.0
}

/// Compute each team's trend and standard deviation
///
/// # Errors
///
/// Returns an error if a derived series cannot be built from the table
pub fn calculate_metrics(table: &SprintTable) -> Result<TeamMetrics> {
    Ok(TeamMetrics {
        trend: per_team(table, row_trend)?,
        std_dev: per_team(table, row_std_dev)?,
    })
}

/// Percentage of periods in which each team reached `threshold`
///
/// # Errors
///
/// Returns an error if `threshold` is not finite or the derived series
/// cannot be built from the table
pub fn success_rate(table: &SprintTable, threshold: f64) -> Result<TeamSeries> {
    if !threshold.is_finite() {
        return Err(invalid_parameter(
            "threshold",
            &threshold,
            &"success threshold must be a finite rate",
        ));
    }
    per_team(table, |rates| row_success_rate(rates, threshold))
}
