//! One value per team, in table order

use crate::io::error::{Result, invalid_source_data};
use crate::math::statistics::{first_max_index, first_min_index};
use ndarray::Array1;

/// A labeled column of per-team values produced by a row-wise reduction
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSeries {
    teams: Vec<String>,
    values: Array1<f64>,
}

impl TeamSeries {
    /// Pair team labels with their values
    ///
    /// # Errors
    ///
    /// Returns an error if the label and value counts differ
    pub fn new(teams: Vec<String>, values: Array1<f64>) -> Result<Self> {
        if teams.len() != values.len() {
            return Err(invalid_source_data(&format!(
                "{} team labels for {} values",
                teams.len(),
                values.len()
            )));
        }
        Ok(Self { teams, values })
    }

    /// Team labels in table order
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Values in table order
    pub const fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// True when the series holds no teams
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Value recorded for `team`
    pub fn get(&self, team: &str) -> Option<f64> {
        self.teams
            .iter()
            .position(|t| t == team)
            .and_then(|index| self.values.get(index).copied())
    }

    /// Iterate `(team, value)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.teams
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Teams whose value satisfies `predicate`, in table order
    pub fn teams_where(&self, predicate: impl Fn(f64) -> bool) -> Vec<String> {
        self.iter()
            .filter(|&(_, value)| predicate(value))
            .map(|(team, _)| team.to_string())
            .collect()
    }

    /// Team holding the smallest non-NaN value; the first one wins ties
    pub fn idxmin(&self) -> Option<&str> {
        first_min_index(self.values.as_slice()?)
            .and_then(|index| self.teams.get(index))
            .map(String::as_str)
    }

    /// Team holding the largest non-NaN value; the first one wins ties
    pub fn idxmax(&self) -> Option<&str> {
        first_max_index(self.values.as_slice()?)
            .and_then(|index| self.teams.get(index))
            .map(String::as_str)
    }
}
