//! Employee record types matching the persisted JSON shape.

use crate::identifiers::EmployeeId;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Any other gender.
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.pad(s)
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ValidationError::PatternMismatch {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// One workforce record.
///
/// Serializes with camelCase field names so the persisted entry keeps the
/// layout documented for the `nexus_employees` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, immutable after creation.
    pub id: EmployeeId,
    /// Display name; non-empty.
    pub full_name: String,
    /// Gender.
    pub gender: Gender,
    /// Calendar date of birth, `YYYY-MM-DD`.
    pub dob: String,
    /// Profile image reference: a URL or a `data:` URI.
    pub profile_image: String,
    /// Jurisdiction name from the fixed list.
    pub state: String,
    /// Whether the employee is currently active.
    pub is_active: bool,
    /// RFC 3339 creation timestamp, set once.
    pub created_at: String,
}

/// Caller-supplied fields for creating or updating an employee.
///
/// Drafts carry everything except the fields the repository owns
/// (`id`, `createdAt`). A draft must pass validation before any
/// mutation proceeds.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDraft {
    /// Display name.
    pub full_name: String,
    /// Gender; drafts default to `Male`, matching the entry form.
    pub gender: Option<Gender>,
    /// Calendar date of birth, `YYYY-MM-DD`.
    pub dob: String,
    /// Profile image reference.
    pub profile_image: String,
    /// Jurisdiction name.
    pub state: String,
    /// Active flag; `None` defaults to active on create and leaves the
    /// existing value untouched on update.
    pub is_active: Option<bool>,
}
