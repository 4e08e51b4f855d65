//! Seed roster used when no persisted collection exists.

use crate::employee::{Employee, Gender};
use crate::identifiers::EmployeeId;
use chrono::{SecondsFormat, Utc};

/// Returns the fixed seed roster.
///
/// Used as the initial collection on first launch, before any record has
/// been persisted. `createdAt` is the time of seeding.
pub fn seed_employees() -> Vec<Employee> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    vec![
        Employee {
            id: EmployeeId::new("EMP001".to_string()),
            full_name: "Jane Doe".to_string(),
            gender: Gender::Female,
            dob: "1992-05-15".to_string(),
            profile_image: "https://picsum.photos/seed/jane/200".to_string(),
            state: "California".to_string(),
            is_active: true,
            created_at: now.clone(),
        },
        Employee {
            id: EmployeeId::new("EMP002".to_string()),
            full_name: "John Smith".to_string(),
            gender: Gender::Male,
            dob: "1988-11-22".to_string(),
            profile_image: "https://picsum.photos/seed/john/200".to_string(),
            state: "New York".to_string(),
            is_active: false,
            created_at: now.clone(),
        },
        Employee {
            id: EmployeeId::new("EMP003".to_string()),
            full_name: "Alex Rivera".to_string(),
            gender: Gender::Other,
            dob: "1995-02-10".to_string(),
            profile_image: "https://picsum.photos/seed/alex/200".to_string(),
            state: "Texas".to_string(),
            is_active: true,
            created_at: now,
        },
    ]
}
