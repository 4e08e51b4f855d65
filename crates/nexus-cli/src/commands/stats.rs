//! Stats command implementation.

use super::{open_repository, CommandResult};
use nexus_roster::stats;
use serde_json::json;

pub fn run(data_dir: &str, json: bool) -> CommandResult {
    let repository = open_repository(data_dir)?;
    // Counts cover the unfiltered collection; filters only narrow the
    // displayed list.
    let counts = stats(repository.employees());

    if json {
        let value = json!({
            "total": counts.total,
            "active": counts.active,
            "inactive": counts.inactive,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("Total:    {}", counts.total);
        println!("Active:   {}", counts.active);
        println!("Inactive: {}", counts.inactive);
    }
    Ok(())
}
