//! Output formatting utilities.

use nexus_model::Employee;

/// Formats an employee as a simple table row.
pub fn format_table_row(employee: &Employee) -> String {
    let status = if employee.is_active {
        "Active"
    } else {
        "Inactive"
    };
    format!(
        "{:<8} {:<24} {:<8} {:<12} {:<16} {}",
        truncate(employee.id.as_ref(), 8),
        truncate(&employee.full_name, 24),
        employee.gender,
        truncate(&employee.dob, 12),
        truncate(&employee.state, 16),
        status
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!(
        "{:<8} {:<24} {:<8} {:<12} {:<16} {}",
        "ID", "FULL_NAME", "GENDER", "DOB", "STATE", "STATUS"
    );
    println!("{}", "-".repeat(80));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    // Cut on a char boundary; names are arbitrary UTF-8.
    let limit = max_len.saturating_sub(3);
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= limit)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..cut])
}
