//! Tests for labeled per-team series lookups and extremes

#[cfg(test)]
mod tests {
    use ndarray::array;
    use sprint_insights::table::TeamSeries;

    fn series(values: ndarray::Array1<f64>) -> TeamSeries {
        let teams = (0..values.len()).map(|i| format!("T{i}")).collect();
        TeamSeries::new(teams, values).unwrap()
    }

    // Tests label and value counts must agree
    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = TeamSeries::new(vec!["A".to_string()], array![1.0, 2.0]);
        assert!(result.is_err());
    }

    // Tests lookup by team label
    // Verified by returning the value at the wrong index
    #[test]
    fn test_get_by_team() {
        let s = series(array![0.1, 0.2, 0.3]);
        assert_eq!(s.get("T1"), Some(0.2));
        assert_eq!(s.get("T9"), None);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
    }

    // Tests filtering keeps table order
    #[test]
    fn test_teams_where_preserves_order() {
        let s = series(array![0.3, -0.2, 0.1, 0.0]);
        assert_eq!(s.teams_where(|v| v > 0.0), vec!["T0", "T2"]);
        assert_eq!(s.teams_where(|v| v < 0.0), vec!["T1"]);
    }

    // Tests extremes resolve ties to the first occurrence
    // Verified by using a non-strict comparison
    #[test]
    fn test_idxmin_idxmax_first_occurrence() {
        let s = series(array![0.2, 0.1, 0.5, 0.1, 0.5]);
        assert_eq!(s.idxmin(), Some("T1"));
        assert_eq!(s.idxmax(), Some("T2"));
    }

    // Tests NaN values are skipped and an all-NaN series has no extremes
    #[test]
    fn test_extremes_skip_nan() {
        let s = series(array![f64::NAN, 0.4, 0.2]);
        assert_eq!(s.idxmin(), Some("T2"));
        assert_eq!(s.idxmax(), Some("T1"));

        let all_nan = series(array![f64::NAN, f64::NAN]);
        assert_eq!(all_nan.idxmin(), None);
        assert_eq!(all_nan.idxmax(), None);
    }

    // Tests pair iteration
    #[test]
    fn test_iter_pairs() {
        let s = series(array![1.0, 2.0]);
        let pairs: Vec<(&str, f64)> = s.iter().collect();
        assert_eq!(pairs, vec![("T0", 1.0), ("T1", 2.0)]);
    }
}
