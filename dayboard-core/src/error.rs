//! Error types for the dayboard core.

use thiserror::Error;

/// Errors that can occur in dayboard operations.
#[derive(Error, Debug)]
pub enum DayboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dayboard operations.
pub type DayboardResult<T> = Result<T, DayboardError>;
