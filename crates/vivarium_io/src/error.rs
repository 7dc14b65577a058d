//! Error types for history persistence.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("file system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("trace snapshot does not parse as a grid: {0}")]
    BadSnapshot(#[from] vivarium_core::GridError),
}

/// Result type alias for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;
