//! Storage error types.

use thiserror::Error;

/// Storage-specific errors.
///
/// The in-memory backend never produces these; the trait surface carries
/// them so fallible backends can slot in behind the same interface.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Stored payload could not be serialized or deserialized.
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// Internal error.
    #[error("internal storage error: {message}")]
    Internal { message: String },
}

impl StorageError {
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
