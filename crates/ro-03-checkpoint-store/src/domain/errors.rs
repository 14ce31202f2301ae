//! Error types for checkpoint storage.

use thiserror::Error;

/// Byte-level storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// I/O error during read/write.
    #[error("Checkpoint store I/O error: {message}")]
    Io { message: String },

    /// The directory lock could not be taken.
    #[error("Failed to lock checkpoint directory {path}: {message}")]
    Lock { path: String, message: String },

    /// The key cannot be used as a file name.
    #[error("Invalid checkpoint key: {key:?}")]
    InvalidKey { key: String },
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

/// Typed checkpoint errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The value could not be encoded.
    #[error("Failed to encode checkpoint {key}: {message}")]
    Encode { key: String, message: String },

    /// A stored record is not a valid encoding of the requested type.
    #[error("Corrupt checkpoint {key}: {message}")]
    Decode { key: String, message: String },
}
