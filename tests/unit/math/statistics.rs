//! Tests for quantiles, first-occurrence extremes and box summaries

#[cfg(test)]
mod tests {
    use sprint_insights::math::statistics::{
        BoxSummary, first_max_index, first_min_index, quantile_sorted,
    };

    // Tests linear interpolation between ranks
    // Verified by switching to nearest-rank quantiles
    #[test]
    fn test_quantile_linear_interpolation() {
        let data = [1.0_f64, 2.0, 3.0, 4.0];
        assert!((quantile_sorted(&data, 0.5).unwrap() - 2.5).abs() < 1e-12);
        assert!((quantile_sorted(&data, 0.25).unwrap() - 1.75).abs() < 1e-12);
        assert!((quantile_sorted(&data, 0.75).unwrap() - 3.25).abs() < 1e-12);
        assert!((quantile_sorted(&data, 0.0).unwrap() - 1.0).abs() < f64::EPSILON);
        assert!((quantile_sorted(&data, 1.0).unwrap() - 4.0).abs() < f64::EPSILON);
    }

    // Tests degenerate inputs yield no quantile
    #[test]
    fn test_quantile_rejects_bad_input() {
        assert_eq!(quantile_sorted::<f64>(&[], 0.5), None);
        assert_eq!(quantile_sorted(&[1.0], 1.5), None);
        assert_eq!(quantile_sorted(&[1.0], -0.1), None);
        assert_eq!(quantile_sorted(&[7.0_f32], 0.3), Some(7.0));
    }

    // Tests extremes keep the first of equal values and skip NaN
    // Verified by iterating from the end
    #[test]
    fn test_first_extreme_indices() {
        let values = [f64::NAN, 3.0, 1.0, 3.0, 1.0];
        assert_eq!(first_min_index(&values), Some(2));
        assert_eq!(first_max_index(&values), Some(1));
        assert_eq!(first_min_index::<f64>(&[]), None);
        assert_eq!(first_max_index(&[f64::NAN]), None);
    }

    // Tests whiskers stop at the last point inside 1.5 IQR and the rest are outliers
    // Verified by extending whiskers to the data extremes
    #[test]
    fn test_box_summary_outliers() {
        let summary =
            BoxSummary::from_values([1.0, 2.0, 3.0, 4.0, 5.0, 100.0], 1.5).unwrap();

        assert!((summary.median - 3.5).abs() < 1e-12);
        assert!((summary.q1 - 2.25).abs() < 1e-12);
        assert!((summary.q3 - 4.75).abs() < 1e-12);
        assert!((summary.whisker_low - 1.0).abs() < f64::EPSILON);
        assert!((summary.whisker_high - 5.0).abs() < f64::EPSILON);
        assert_eq!(summary.outliers, vec![100.0]);
    }

    // Tests NaN values are ignored and an all-NaN row has no summary
    #[test]
    fn test_box_summary_ignores_nan() {
        let summary = BoxSummary::from_values([0.5, f64::NAN, 0.7], 1.5).unwrap();
        assert!((summary.median - 0.6).abs() < 1e-12);
        assert!(summary.outliers.is_empty());

        assert!(BoxSummary::from_values([f64::NAN], 1.5).is_none());
    }

    // Tests infinite values are left out of quartiles and outliers
    #[test]
    fn test_box_summary_ignores_infinite() {
        let summary =
            BoxSummary::from_values([0.5, 0.6, 0.7, 0.8, f64::INFINITY, f64::NEG_INFINITY], 1.5)
                .unwrap();
        assert!((summary.median - 0.65).abs() < 1e-12);
        assert!(summary.q3.is_finite());
        assert!(summary.outliers.iter().all(|v| v.is_finite()));

        assert!(BoxSummary::from_values([f64::INFINITY], 1.5).is_none());
    }
}
