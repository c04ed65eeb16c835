//! Completion rate table indexed by team and sprint period

use crate::io::error::{Result, invalid_source_data};
use ndarray::{Array2, ArrayView1, Axis};
use std::collections::HashSet;

/// Completion rates with one row per team and one column per sprint period
///
/// Column order is meaningful: the first and last periods bound the trend
/// window. The table is read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct SprintTable {
    index_name: String,
    teams: Vec<String>,
    periods: Vec<String>,
    rates: Array2<f64>,
}

impl SprintTable {
    /// Build a table from labels and a `(teams, periods)` shaped rate matrix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no teams or no periods
    /// - The matrix shape does not match the label counts
    /// - A team label appears more than once
    pub fn new(
        index_name: impl Into<String>,
        teams: Vec<String>,
        periods: Vec<String>,
        rates: Array2<f64>,
    ) -> Result<Self> {
        if teams.is_empty() {
            return Err(invalid_source_data(&"table has no teams"));
        }
        if periods.is_empty() {
            return Err(invalid_source_data(&"table has no sprint periods"));
        }

        let (rows, cols) = rates.dim();
        if rows != teams.len() || cols != periods.len() {
            return Err(invalid_source_data(&format!(
                "rate matrix is {rows}x{cols} but labels describe {}x{}",
                teams.len(),
                periods.len()
            )));
        }

        let mut seen = HashSet::with_capacity(teams.len());
        for team in &teams {
            if !seen.insert(team.as_str()) {
                return Err(invalid_source_data(&format!(
                    "duplicate team label '{team}'"
                )));
            }
        }

        Ok(Self {
            index_name: index_name.into(),
            teams,
            periods,
            rates,
        })
    }

    /// Build a table from `(team, rates)` rows sharing the given periods
    ///
    /// # Errors
    ///
    /// Returns an error if a row's length differs from the period count, or
    /// for any reason [`SprintTable::new`] rejects the result
    pub fn from_rows<S: AsRef<str>>(periods: &[S], rows: &[(&str, Vec<f64>)]) -> Result<Self> {
        let period_count = periods.len();
        let mut values = Vec::with_capacity(rows.len() * period_count);
        for (team, row) in rows {
            if row.len() != period_count {
                return Err(invalid_source_data(&format!(
                    "team '{team}' has {} values for {period_count} periods",
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }

        let rates = Array2::from_shape_vec((rows.len(), period_count), values)
            .map_err(|e| invalid_source_data(&e))?;

        Self::new(
            String::new(),
            rows.iter().map(|(team, _)| (*team).to_string()).collect(),
            periods.iter().map(|p| p.as_ref().to_string()).collect(),
            rates,
        )
    }

    /// Header of the team label column
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Team labels in table order
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Sprint period labels in column order
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// Full rate matrix
    pub const fn rates(&self) -> &Array2<f64> {
        &self.rates
    }

    /// Number of teams
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Number of sprint periods
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// Rates of the team at `index`, if it exists
    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.team_count()).then(|| self.rates.index_axis(Axis(0), index))
    }

    /// Rates of the named team, if it exists
    pub fn team_rates(&self, team: &str) -> Option<ArrayView1<'_, f64>> {
        self.teams
            .iter()
            .position(|t| t == team)
            .and_then(|index| self.row(index))
    }

    /// Iterate `(team, rates)` pairs in table order
    pub fn rows(&self) -> impl Iterator<Item = (&str, ArrayView1<'_, f64>)> {
        self.teams
            .iter()
            .map(String::as_str)
            .zip(self.rates.axis_iter(Axis(0)))
    }
}
