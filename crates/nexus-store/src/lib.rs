//! Pluggable key-value storage backend for NexusHR state.
//!
//! This crate provides:
//! - `RecordStore` trait for durable key-value storage of JSON values
//! - File-backed reference implementation with atomic writes
//! - In-memory backend for tests and ephemeral use
//! - `StorageFull` surfacing for quota and disk-full conditions
//!
//! The store durably mirrors application state; it has no independent
//! authority and never originates mutations. A missing or corrupt entry
//! loads as absent, not as an error, so callers fall back to a default.

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// File-backed storage implementation.
pub mod file;
/// In-memory storage implementation.
pub mod memory;
/// Storage backend trait.
pub mod traits;

pub use error::StoreError;
pub use file::{FileStore, StoreOptions};
pub use memory::MemoryStore;
pub use traits::RecordStore;
