//! Delimited-text export formatter.

use chrono::NaiveDate;
use nexus_model::Employee;

/// Header row of the export.
pub const CSV_HEADER: &str = "ID,Full Name,Gender,DOB,State,Status";

/// Serializes the given sequence into CSV, one row per employee in the
/// sequence's order, after the header row.
///
/// Operates on whatever sequence it is given — typically a filtered view,
/// not the full collection. Fields are joined verbatim with commas; a
/// value containing a comma produces an ambiguous row. This matches the
/// historical export format and is kept deliberately (see DESIGN.md).
pub fn to_csv<'a, I>(employees: I) -> String
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut lines = vec![CSV_HEADER.to_string()];
    lines.extend(employees.into_iter().map(|e| {
        [
            e.id.as_ref(),
            e.full_name.as_str(),
            &e.gender.to_string(),
            e.dob.as_str(),
            e.state.as_str(),
            if e.is_active { "Active" } else { "Inactive" },
        ]
        .join(",")
    }));
    lines.join("\n")
}

/// File name for an export taken on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("nexus_employees_{}.csv", date.format("%Y-%m-%d"))
}
