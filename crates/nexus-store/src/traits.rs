//! Storage backend trait.

use crate::error::StoreError;
use serde_json::Value;

/// Durable key-value storage of JSON values.
///
/// Implementations must make `save` atomic from the caller's point of
/// view: a reader never observes a partial write, and a failed save
/// leaves the previous value intact.
pub trait RecordStore {
    /// Loads the value stored under `key`.
    ///
    /// A missing or corrupt entry yields `Ok(None)` so callers fall back
    /// to a default; only genuine I/O failures are errors.
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Durably stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &Value) -> Result<(), StoreError>;

    /// Removes the entry under `key`. Removing an absent entry is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
