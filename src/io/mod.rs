//! Input/output operations, configuration and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Thresholds, file names and layout constants
pub mod configuration;
/// Error types for loading, rendering and export
pub mod error;
/// JPEG export of rendered charts
pub mod image;
/// Sprint table file loader
pub mod loader;
/// Chart rendering progress display
pub mod progress;
/// Table chart writers
pub mod visualization;
