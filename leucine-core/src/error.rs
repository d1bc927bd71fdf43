//! Structured error types shared across the workspace.

use thiserror::Error;

/// Unified error type for sequence and report operations.
#[derive(Debug, Error)]
pub enum LeucineError {
    /// I/O error (report output could not be written)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input (symbol outside an alphabet, bad arguments)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Serialization failure when rendering a report
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LeucineError>;
