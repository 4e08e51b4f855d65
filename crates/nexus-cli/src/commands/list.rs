//! List command implementation.

use super::{filter_spec, open_repository, CommandResult};
use crate::output;
use crate::FilterArgs;
use nexus_roster::filtered_view;

pub fn run(data_dir: &str, filters: &FilterArgs, json: bool) -> CommandResult {
    let spec = filter_spec(filters)?;
    let repository = open_repository(data_dir)?;
    let view = filtered_view(repository.employees(), &spec);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    output::print_table_header();
    for employee in view {
        println!("{}", output::format_table_row(employee));
    }
    Ok(())
}
