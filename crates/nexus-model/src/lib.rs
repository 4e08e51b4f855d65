//! Canonical data model primitives shared across NexusHR crates.
//!
//! This crate provides:
//! - `Employee` and `Session` record types with their persisted JSON shape
//! - `EmployeeId` validated identifier and sequential id allocation
//! - Field validation for employee create/update drafts
//! - The fixed jurisdiction (US state) list
//! - The seed roster used when no persisted collection exists
//!
//! Core invariants:
//! - Employee ids are unique and never reused after deletion
//! - `id` and `createdAt` are immutable after creation
//! - Validation rejects a draft entirely; there is no partial acceptance

#![deny(missing_docs)]

/// Employee record types.
pub mod employee;
/// Validated identifiers and id allocation.
pub mod identifiers;
/// Seed roster for first launch.
pub mod seed;
/// Signed-in session type.
pub mod session;
/// Jurisdiction list.
pub mod states;
/// Draft validation.
pub mod validation;

pub use employee::{Employee, EmployeeDraft, Gender};
pub use identifiers::{next_employee_id, EmployeeId};
pub use seed::seed_employees;
pub use session::Session;
pub use states::{is_us_state, US_STATES};
pub use validation::{validate_draft, ValidationError};
