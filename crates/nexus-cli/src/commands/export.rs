//! Export command implementation.

use super::{filter_spec, open_repository, CommandResult};
use crate::FilterArgs;
use chrono::Utc;
use nexus_roster::{export_filename, filtered_view, to_csv};
use std::fs;

pub fn run(data_dir: &str, filters: &FilterArgs, out: Option<String>) -> CommandResult {
    let spec = filter_spec(filters)?;
    let repository = open_repository(data_dir)?;
    let view = filtered_view(repository.employees(), &spec);

    let path = out.unwrap_or_else(|| export_filename(Utc::now().date_naive()));
    let rows = view.len();
    fs::write(&path, to_csv(view))?;
    println!("Exported {} records to {}", rows, path);
    Ok(())
}
