//! Content store error types.

use thiserror::Error;

/// Errors raised while enumerating stored content.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StoreError {
    #[error("content store unavailable: {message}")]
    Unavailable { message: String },

    #[error("content store data is corrupt: {message}")]
    Corrupt { message: String },
}

impl StoreError {
    /// Creates unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates corrupt data error.
    #[must_use]
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }
}
