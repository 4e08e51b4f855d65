//! Validated employee identifiers and sequential id allocation.

use crate::employee::Employee;
use crate::validation::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern for employee identifiers: `EMP` followed by at least three
/// decimal digits (`EMP001`, `EMP1000`, ...).
const EMPLOYEE_ID_PATTERN: &str = r"^EMP\d{3,}$";

/// Stable identifier for employee records (`EMP` + zero-padded decimal).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new instance without validation; callers are responsible
    /// for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated identifier from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !Regex::new(EMPLOYEE_ID_PATTERN)
            .expect("invalid regex")
            .is_match(&s)
        {
            return Err(ValidationError::PatternMismatch {
                field: "id",
                value: s,
            });
        }
        Ok(Self(s))
    }

    /// Builds an identifier from a numeric suffix, zero-padded to width 3.
    ///
    /// The width grows naturally past 999 (`EMP1000`).
    pub fn from_suffix(suffix: u64) -> Self {
        Self(format!("EMP{:03}", suffix))
    }

    /// Numeric suffix of the identifier.
    ///
    /// Identifiers loaded from storage are not revalidated, so an
    /// unparsable suffix yields 0 rather than an error.
    pub fn suffix(&self) -> u64 {
        self.0.strip_prefix("EMP").and_then(|s| s.parse().ok()).unwrap_or(0)
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Derives the next unique employee identifier from the collection.
///
/// Takes the maximum numeric suffix of the existing ids and adds one.
/// Suffixes need not be contiguous; deletions leave gaps and deleted ids
/// are never reused. An empty collection yields `EMP001`.
pub fn next_employee_id(employees: &[Employee]) -> EmployeeId {
    let max = employees.iter().map(|e| e.id.suffix()).max().unwrap_or(0);
    EmployeeId::from_suffix(max + 1)
}
