//! Error types for tracker operations.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors returned by the template and workout stores.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Rejected input: empty name, no exercises, zero set count, empty session.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The backing store failed to read or write a collection.
    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl TrackerError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        TrackerError::ValidationError(message.into())
    }

    /// Whether this error reports rejected input.
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::ValidationError(_))
    }
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
