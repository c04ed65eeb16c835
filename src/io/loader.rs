//! Reading the sprint table from a delimited text file

use crate::io::error::LoadError;
use crate::table::SprintTable;
use csv::{ReaderBuilder, StringRecord, Trim};
use ndarray::Array2;
use std::collections::HashSet;
use std::path::Path;

/// Load a table whose header names the sprint periods and whose first
/// column holds the team labels
///
/// # Errors
///
/// Returns a [`LoadError`] that tells apart a missing file, a file without
/// data, and every other read or parse failure
pub fn load_table(path: &Path) -> Result<SprintTable, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => read_error(path, &e),
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(LoadError::EmptyData {
            path: path.to_path_buf(),
        });
    }

    let table = parse_table(path, &bytes)?;
    tracing::debug!(
        path = %path.display(),
        teams = table.team_count(),
        periods = table.period_count(),
        "loaded sprint table"
    );
    Ok(table)
}

/// Parse CSV text into a table; `path` is only used for error reporting
///
/// # Errors
///
/// Returns [`LoadError::EmptyData`] for a header without rows and
/// [`LoadError::Read`] for any malformed content
pub fn parse_table(path: &Path, bytes: &[u8]) -> Result<SprintTable, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let header = reader.headers().map_err(|e| read_error(path, &e))?.clone();
    let mut columns = header.iter();
    let index_name = columns.next().unwrap_or_default().to_string();
    let periods: Vec<String> = columns.map(str::to_string).collect();
    if periods.is_empty() {
        return Err(read_error(path, &"header names no sprint periods"));
    }

    let mut teams = Vec::new();
    let mut values = Vec::new();
    let mut seen = HashSet::new();
    for record in reader.records() {
        let record = record.map_err(|e| read_error(path, &e))?;
        let (team, rates) = parse_record(&record, periods.len()).map_err(|reason| {
            let line = record.position().map_or(0, csv::Position::line);
            read_error(path, &format!("line {line}: {reason}"))
        })?;
        if !seen.insert(team.clone()) {
            return Err(read_error(path, &format!("duplicate team label '{team}'")));
        }
        teams.push(team);
        values.extend(rates);
    }

    if teams.is_empty() {
        return Err(LoadError::EmptyData {
            path: path.to_path_buf(),
        });
    }

    let rates = Array2::from_shape_vec((teams.len(), periods.len()), values)
        .map_err(|e| read_error(path, &e))?;
    SprintTable::new(index_name, teams, periods, rates).map_err(|e| read_error(path, &e))
}

fn parse_record(record: &StringRecord, period_count: usize) -> Result<(String, Vec<f64>), String> {
    let mut fields = record.iter();
    let team = fields.next().unwrap_or_default().to_string();

    let rates = fields
        .map(|field| {
            if field.is_empty() {
                return Ok(f64::NAN);
            }
            field
                .parse::<f64>()
                .map_err(|e| format!("team '{team}' has non-numeric value '{field}': {e}"))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    if rates.len() != period_count {
        return Err(format!(
            "team '{team}' has {} values for {period_count} periods",
            rates.len()
        ));
    }
    Ok((team, rates))
}

fn read_error(path: &Path, reason: &impl ToString) -> LoadError {
    LoadError::Read {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
