//! Delete command implementation.

use super::{describe_roster_error, open_repository, CommandResult};
use nexus_model::EmployeeId;

pub fn run(data_dir: &str, id: &str, yes: bool) -> CommandResult {
    let id = EmployeeId::parse(id)?;
    let mut repository = open_repository(data_dir)?;

    if !yes {
        println!(
            "This permanently deletes {} and cannot be undone. \
             Re-run with --yes to confirm.",
            id
        );
        return Ok(());
    }

    if repository.delete(id.as_ref()).map_err(describe_roster_error)? {
        println!("Deleted {}", id);
    }
    Ok(())
}
