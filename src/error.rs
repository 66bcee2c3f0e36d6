//! Error types for the tidycli toolkit.

use thiserror::Error;

/// Table grid errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("invalid row or column index: row {row}, column {col} (both must be >= 1)")]
    InvalidIndex { row: usize, col: usize },
}

/// Errors raised by the CLI façade, configuration and logging layers.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Unknown flag: {0}")]
    UnknownFlag(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}
