//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during read, write, or remove.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error while encoding a value.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Key contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid store key '{0}'")]
    InvalidKey(String),
    /// Saving would exceed the storage quota.
    ///
    /// Not retried; the last successfully persisted value remains on disk
    /// and the caller's in-memory state is unsaved until space is freed.
    #[error("storage quota exceeded while saving '{key}'")]
    StorageFull {
        /// Key whose save exceeded the quota.
        key: String,
    },
}

impl StoreError {
    /// Returns true for the quota-exceeded condition.
    pub fn is_storage_full(&self) -> bool {
        matches!(self, StoreError::StorageFull { .. })
    }
}
