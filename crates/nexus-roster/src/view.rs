//! Derived filtered views and aggregate counts.
//!
//! Views are pure functions recomputed on demand from the repository's
//! current snapshot. Collections are small enough for full sequential
//! scans; nothing is indexed or cached.

use nexus_model::{Employee, Gender, ValidationError};
use std::str::FromStr;

/// Gender restriction of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    /// Match every gender.
    #[default]
    All,
    /// Match only the given gender.
    Only(Gender),
}

impl GenderFilter {
    /// Returns true if `gender` satisfies the restriction.
    pub fn matches(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Only(g) => *g == gender,
        }
    }
}

impl FromStr for GenderFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(GenderFilter::All)
        } else {
            Gender::from_str(s).map(GenderFilter::Only)
        }
    }
}

/// Status restriction of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Match active and inactive records.
    #[default]
    All,
    /// Match only active records.
    Active,
    /// Match only inactive records.
    Inactive,
}

impl StatusFilter {
    /// Returns true if a record with the given `is_active` flag matches.
    pub fn matches(&self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "inactive" => Ok(StatusFilter::Inactive),
            _ => Err(ValidationError::PatternMismatch {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

/// Transient filter specification; never persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against `fullName`.
    pub search: String,
    /// Gender restriction.
    pub gender: GenderFilter,
    /// Status restriction.
    pub status: StatusFilter,
}

impl FilterSpec {
    /// Returns true if the record satisfies all three restrictions.
    pub fn matches(&self, employee: &Employee) -> bool {
        employee
            .full_name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            && self.gender.matches(employee.gender)
            && self.status.matches(employee.is_active)
    }
}

/// Retains the records matching `spec`, preserving input order.
pub fn filtered_view<'a>(employees: &'a [Employee], spec: &FilterSpec) -> Vec<&'a Employee> {
    employees.iter().filter(|e| spec.matches(e)).collect()
}

/// Aggregate counts over a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Total record count.
    pub total: usize,
    /// Records with `isActive` set.
    pub active: usize,
    /// Records with `isActive` unset.
    pub inactive: usize,
}

/// Computes aggregate counts over the *unfiltered* collection.
///
/// Filters affect only the displayed list, never the aggregate counts,
/// so this takes the repository's full snapshot.
pub fn stats(employees: &[Employee]) -> Stats {
    let total = employees.len();
    let active = employees.iter().filter(|e| e.is_active).count();
    Stats {
        total,
        active,
        inactive: total - active,
    }
}
