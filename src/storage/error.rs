//! Error types for session storage.

use thiserror::Error;

/// Errors raised while reading or writing a session slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot could not be read or written.
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot text is not valid JSON for the expected shape.
    #[error("Session storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The slot parsed but violates an order invariant.
    #[error("Malformed saved order: {0}")]
    Malformed(String),

    /// The session token cannot be used as a storage name.
    #[error("Invalid session token: {0:?}")]
    InvalidSession(String),
}
