//! CLI error types

use raphson_solvers::equation::newton::ConfigError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Solver configuration rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric value could not be parsed
    #[error("Invalid {name}: expected a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    /// Input ended before a value was read
    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    /// The plot window could not be opened
    #[cfg(feature = "plot")]
    #[error("Plot error: {0}")]
    Plot(String),
}
