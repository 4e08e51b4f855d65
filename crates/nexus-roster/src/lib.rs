//! Employee roster core: repository, derived views, export, session gate.
//!
//! This crate provides:
//! - `Repository`: the authoritative in-memory employee collection, with
//!   create/update/delete/toggle operations that persist after every
//!   mutation
//! - `FilterSpec`, `filtered_view`, and `stats`: pure derived views over
//!   the repository's current snapshot
//! - `to_csv`: the delimited export formatter
//! - `SessionGate`: minimal sign-in lifecycle persisted beside the roster
//!
//! Core invariants:
//! - The repository is the single source of truth; views and exports are
//!   recomputed on demand from its current snapshot
//! - Every mutation persists the full collection before returning
//! - Operations on a nonexistent id are silent no-ops
//! - A failed (quota) save keeps the in-memory mutation applied

#![deny(missing_docs)]

/// Error types for roster operations.
pub mod error;
/// Delimited-text export formatter.
pub mod export;
/// The employee repository.
pub mod repository;
/// Sign-in session lifecycle.
pub mod session;
/// Derived filtered views and aggregate counts.
pub mod view;

pub use error::RosterError;
pub use export::{export_filename, to_csv, CSV_HEADER};
pub use repository::{Repository, EMPLOYEES_KEY};
pub use session::{SessionGate, AUTH_USER_KEY, DEFAULT_EMAIL, DEFAULT_NAME};
pub use view::{filtered_view, stats, FilterSpec, GenderFilter, Stats, StatusFilter};
