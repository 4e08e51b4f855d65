//! Toggle command implementation.

use super::{describe_roster_error, open_repository, CommandResult};
use nexus_model::EmployeeId;

pub fn run(data_dir: &str, id: &str) -> CommandResult {
    let id = EmployeeId::parse(id)?;
    let mut repository = open_repository(data_dir)?;
    if repository
        .toggle_active(id.as_ref())
        .map_err(describe_roster_error)?
    {
        let employee = repository.employees().iter().find(|e| e.id == id);
        if let Some(employee) = employee {
            let status = if employee.is_active { "Active" } else { "Inactive" };
            println!("{} is now {}", id, status);
        }
    }
    Ok(())
}
