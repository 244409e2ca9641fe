//! Store error types

use thiserror::Error;

/// Errors that can occur when persisting or reading session records
#[derive(Error, Debug)]
pub enum SessionStoreError {
    /// Underlying storage failure (unavailable, permissions, out of space)
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored text under a key does not parse as a record collection
    #[error("corrupt session data under key '{key}': {source}")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// JSON encoding failure on the write path
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, SessionStoreError>;
