//! Grouping teams by trend direction and spread

use crate::io::configuration::CONSISTENCY_THRESHOLD;
use crate::table::TeamSeries;

/// Teams grouped by how their completion rate moved and how much it varied
///
/// The three groups are not mutually exclusive: a small negative trend is
/// both declining and consistent, a zero trend is only consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamClassification {
    /// Teams with a strictly positive trend
    pub improving_teams: Vec<String>,
    /// Teams with a strictly negative trend
    pub declining_teams: Vec<String>,
    /// Teams whose trend magnitude is below the consistency threshold
    pub consistent_teams: Vec<String>,
    /// Team with the smallest standard deviation
    pub most_consistent_team: Option<String>,
    /// Team with the largest standard deviation
    pub least_consistent_team: Option<String>,
}

/// Classify teams from their trend and standard deviation series
///
/// Extremes skip NaN deviations and resolve ties to the first team in
/// table order.
pub fn classify_teams(trend: &TeamSeries, std_dev: &TeamSeries) -> TeamClassification {
    TeamClassification {
        improving_teams: trend.teams_where(|t| t > 0.0),
        declining_teams: trend.teams_where(|t| t < 0.0),
        consistent_teams: trend.teams_where(|t| t.abs() < CONSISTENCY_THRESHOLD),
        most_consistent_team: std_dev.idxmin().map(str::to_string),
        least_consistent_team: std_dev.idxmax().map(str::to_string),
    }
}
