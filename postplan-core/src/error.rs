//! Error types for postplan.

use thiserror::Error;

/// Errors that can occur in postplan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for postplan operations.
pub type PlanResult<T> = Result<T, PlanError>;
