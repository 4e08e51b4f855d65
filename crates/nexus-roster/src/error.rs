//! Error types for roster operations.

use nexus_model::ValidationError;
use nexus_store::StoreError;
use thiserror::Error;

/// Errors that can occur during roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Persistence failed. On `StorageFull` the in-memory mutation stays
    /// applied; only the save is lost.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// The draft violated field validation; one entry per violated field.
    /// Nothing was mutated or persisted.
    #[error("validation failed: {}", format_field_errors(.0))]
    Invalid(Vec<ValidationError>),
}

impl RosterError {
    /// Field-level validation errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&[ValidationError]> {
        match self {
            RosterError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

fn format_field_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
