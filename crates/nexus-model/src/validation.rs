//! Field validation for employee drafts.

use crate::employee::EmployeeDraft;
use crate::states::is_us_state;
use thiserror::Error;

/// Validation errors for employee fields and identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a required field is empty or absent.
    #[error("{message}")]
    MissingField {
        /// Field name that failed validation.
        field: &'static str,
        /// User-facing message for the violation.
        message: &'static str,
    },
    /// When a value does not match the required pattern or allowed set.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

impl ValidationError {
    /// Name of the violated field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field, .. } => field,
            ValidationError::PatternMismatch { field, .. } => field,
        }
    }
}

/// Validates a draft before create or update proceeds.
///
/// Collects one error per violated field; the caller rejects the whole
/// operation if any are present (no partial save).
pub fn validate_draft(draft: &EmployeeDraft) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if draft.full_name.trim().is_empty() {
        errors.push(ValidationError::MissingField {
            field: "fullName",
            message: "Full Name is required",
        });
    }
    if draft.dob.is_empty() {
        errors.push(ValidationError::MissingField {
            field: "dob",
            message: "Date of Birth is required",
        });
    }
    if draft.state.is_empty() {
        errors.push(ValidationError::MissingField {
            field: "state",
            message: "Please select a state",
        });
    } else if !is_us_state(&draft.state) {
        errors.push(ValidationError::PatternMismatch {
            field: "state",
            value: draft.state.clone(),
        });
    }
    if draft.profile_image.is_empty() {
        errors.push(ValidationError::MissingField {
            field: "profileImage",
            message: "Profile image is required",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
