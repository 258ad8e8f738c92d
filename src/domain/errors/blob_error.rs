//! Blob store error types.

use thiserror::Error;

/// Errors raised while reading a stored article blob.
#[derive(Debug, Error)]
pub enum BlobError {
    /// No blob is stored for the item.
    #[error("blob not found: {0}")]
    NotFound(String),
    /// The blob could not be read.
    #[error("failed to read blob: {0}")]
    Io(#[from] std::io::Error),
    /// The blob contents are not valid text.
    #[error("blob is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}
