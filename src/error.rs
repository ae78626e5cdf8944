use thiserror::Error;

use crate::domain::validate::ValidationError;

/// Result type for library and CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside a solve call
#[derive(Error, Debug)]
pub enum Error {
    /// Problem input failed validation
    #[error("invalid problem: {0}")]
    Validation(#[from] ValidationError),

    /// Reading a problem file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Problem file is not valid JSON for the expected shape
    #[error("failed to parse problem file: {0}")]
    Json(#[from] serde_json::Error),

    /// Solver name not recognised (or its feature is not enabled)
    #[error("unknown solver: {0}")]
    UnknownSolver(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),
}
