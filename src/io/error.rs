//! Error types for table loading, chart rendering and export

use std::path::PathBuf;
use thiserror::Error;

/// Why a sprint table could not be loaded
///
/// Loading failures are reported and skip the rest of the run; they never
/// terminate the process.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist
    #[error("{} not found.", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The input file exists but holds no table data
    #[error("No data in {}", path.display())]
    EmptyData {
        /// Path of the empty file
        path: PathBuf,
    },

    /// Any other read or parse failure
    #[error("An error occurred: {reason}")]
    Read {
        /// Path of the file being read
        path: PathBuf,
        /// Description of what went wrong
        reason: String,
    },
}

impl LoadError {
    /// Path of the file the failure refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::EmptyData { path } | Self::Read { path, .. } => path,
        }
    }
}

/// Main error type for metric, rendering and export operations
#[derive(Debug, Error)]
pub enum InsightsError {
    /// Data handed to an operation doesn't meet its requirements
    #[error("Invalid source data: {reason}")]
    InvalidSourceData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a chart image
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for fallible operations
pub type Result<T> = std::result::Result<T, InsightsError>;

/// Create an invalid source data error
pub fn invalid_source_data(reason: &impl ToString) -> InsightsError {
    InsightsError::InvalidSourceData {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> InsightsError {
    InsightsError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
