//! Tests for team classification by trend and spread

#[cfg(test)]
mod tests {
    use ndarray::{Array1, array};
    use sprint_insights::analysis::classification::classify_teams;
    use sprint_insights::analysis::metrics::calculate_metrics;
    use sprint_insights::table::{SprintTable, TeamSeries};

    fn series(teams: &[&str], values: Array1<f64>) -> TeamSeries {
        TeamSeries::new(teams.iter().map(|t| (*t).to_string()).collect(), values).unwrap()
    }

    // Tests the three trend groups, including overlapping membership
    // Verified by making the groups mutually exclusive
    #[test]
    fn test_trend_groups_overlap() {
        let teams = ["Up", "Flat", "Dip", "Down"];
        let trend = series(&teams, array![0.3, 0.0, -0.05, -0.4]);
        let std_dev = series(&teams, array![0.1, 0.2, 0.3, 0.4]);

        let groups = classify_teams(&trend, &std_dev);

        assert_eq!(groups.improving_teams, vec!["Up"]);
        assert_eq!(groups.declining_teams, vec!["Dip", "Down"]);
        assert_eq!(groups.consistent_teams, vec!["Flat", "Dip"]);
    }

    // Tests consistency requires a magnitude strictly below the threshold
    #[test]
    fn test_consistency_threshold_strict() {
        let teams = ["Edge", "Inside"];
        let trend = series(&teams, array![0.1, 0.099]);
        let std_dev = series(&teams, array![0.0, 0.0]);

        let groups = classify_teams(&trend, &std_dev);
        assert_eq!(groups.consistent_teams, vec!["Inside"]);
    }

    // Tests extremes agree with a direct scan and ties go to the first team
    // Verified by picking the last extreme
    #[test]
    fn test_spread_extremes() {
        let teams = ["A", "B", "C", "D"];
        let trend = series(&teams, array![0.0, 0.0, 0.0, 0.0]);
        let std_dev = series(&teams, array![0.2, 0.05, 0.3, 0.05]);

        let groups = classify_teams(&trend, &std_dev);
        assert_eq!(groups.most_consistent_team.as_deref(), Some("B"));
        assert_eq!(groups.least_consistent_team.as_deref(), Some("C"));
    }

    // Tests undefined deviations leave the extremes empty
    #[test]
    fn test_spread_extremes_all_nan() {
        let trend = series(&["A"], array![0.0]);
        let std_dev = series(&["A"], array![f64::NAN]);

        let groups = classify_teams(&trend, &std_dev);
        assert!(groups.most_consistent_team.is_none());
        assert!(groups.least_consistent_team.is_none());
    }

    // Tests classification of the sample table end to end
    #[test]
    fn test_sample_table_classification() {
        let metrics = calculate_metrics(&crate::sample_table()).unwrap();
        let groups = classify_teams(&metrics.trend, &metrics.std_dev);

        assert!(groups.improving_teams.contains(&"A".to_string()));
        assert!(groups.consistent_teams.contains(&"B".to_string()));
        assert!(!groups.consistent_teams.contains(&"A".to_string()));
        assert!(groups.declining_teams.is_empty());
        assert_eq!(groups.most_consistent_team.as_deref(), Some("B"));
        assert_eq!(groups.least_consistent_team.as_deref(), Some("A"));
    }

    // Tests a team with a missing rate still takes part in the spread extremes
    #[test]
    fn test_missing_rate_keeps_team_in_extremes() {
        let table = SprintTable::from_rows(
            &["S1", "S2", "S3"],
            &[("A", vec![0.5, f64::NAN, 0.8]), ("B", vec![0.9, 0.85, 0.95])],
        )
        .unwrap();
        let metrics = calculate_metrics(&table).unwrap();
        let groups = classify_teams(&metrics.trend, &metrics.std_dev);

        assert_eq!(groups.most_consistent_team.as_deref(), Some("B"));
        assert_eq!(groups.least_consistent_team.as_deref(), Some("A"));
    }
}
