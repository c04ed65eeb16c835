//! Order statistics over small slices of rates

use num_traits::{Float, NumCast};

/// Linearly interpolated quantile of an ascending slice
///
/// Matches the default "linear" method of common numeric libraries: the
/// quantile sits at fractional rank `q * (n - 1)`. Returns `None` for an
/// empty slice or a `q` outside `[0, 1]`.
pub fn quantile_sorted<T: Float>(sorted: &[T], q: T) -> Option<T> {
    if sorted.is_empty() || q < T::zero() || q > T::one() {
        return None;
    }

    let last = sorted.len() - 1;
    let rank = q * <T as NumCast>::from(last)?;
    let lower = rank.floor().to_usize()?.min(last);
    let upper = rank.ceil().to_usize()?.min(last);
    let fraction = rank - rank.floor();

    let low = *sorted.get(lower)?;
    let high = *sorted.get(upper)?;
    Some((high - low).mul_add(fraction, low))
}

fn first_extreme_index<T: Float>(values: &[T], better: impl Fn(T, T) -> bool) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (index, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if !better(value, current) => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Index of the smallest non-NaN value, first occurrence on ties
pub fn first_min_index<T: Float>(values: &[T]) -> Option<usize> {
    first_extreme_index(values, |candidate, current| candidate < current)
}

/// Index of the largest non-NaN value, first occurrence on ties
pub fn first_max_index<T: Float>(values: &[T]) -> Option<usize> {
    first_extreme_index(values, |candidate, current| candidate > current)
}

/// Five-number summary with outliers, as drawn by a box-and-whisker chart
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Smallest observation within the lower whisker reach
    pub whisker_low: f64,
    /// Largest observation within the upper whisker reach
    pub whisker_high: f64,
    /// Observations beyond either whisker, ascending
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarize the finite values; `None` if there are none
    ///
    /// Infinite values have no position on a value axis and are left out
    /// along with NaN. Whiskers extend to the most extreme observations lying within
    /// `whisker_factor` interquartile ranges of the box.
    pub fn from_values(values: impl IntoIterator<Item = f64>, whisker_factor: f64) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_sorted(&sorted, 0.25)?;
        let median = quantile_sorted(&sorted, 0.5)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let reach = whisker_factor * (q3 - q1);
        let low_limit = q1 - reach;
        let high_limit = q3 + reach;

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= low_limit)
            .unwrap_or(q1)
            .min(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= high_limit)
            .unwrap_or(q3)
            .max(q3);
        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}
