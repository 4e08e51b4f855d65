//! In-memory storage implementation.

use crate::error::StoreError;
use crate::traits::RecordStore;
use serde_json::Value;
use std::collections::BTreeMap;

/// Ephemeral `RecordStore` backed by a map.
///
/// Used by tests and anywhere durability is not required. Tracks how many
/// saves have been performed so tests can assert that an operation did
/// (or did not) invoke persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
    quota: Option<u64>,
    save_count: u64,
}

impl MemoryStore {
    /// Creates an empty store with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects entries serializing to more
    /// than `quota` bytes.
    pub fn with_quota(quota: u64) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Number of successful saves performed.
    pub fn save_count(&self) -> u64 {
        self.save_count
    }
}

impl RecordStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let size = serde_json::to_vec(value)?.len() as u64;
            if size > quota {
                return Err(StoreError::StorageFull {
                    key: key.to_string(),
                });
            }
        }
        self.entries.insert(key.to_string(), value.clone());
        self.save_count += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
