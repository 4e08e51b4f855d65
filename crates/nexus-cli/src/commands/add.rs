//! Add command implementation.

use super::{describe_roster_error, open_repository, CommandResult};
use crate::image;
use nexus_model::{EmployeeDraft, Gender};
use std::str::FromStr;

pub fn run(
    data_dir: &str,
    full_name: String,
    gender: &str,
    dob: String,
    state: String,
    image: &str,
    inactive: bool,
) -> CommandResult {
    let mut repository = open_repository(data_dir)?;

    let profile_image = if image.is_empty() {
        String::new()
    } else {
        image::image_reference(image)?
    };
    let draft = EmployeeDraft {
        full_name,
        gender: Some(Gender::from_str(gender)?),
        dob,
        profile_image,
        state,
        is_active: Some(!inactive),
    };

    let employee = repository.create(draft).map_err(describe_roster_error)?;
    println!("Created {}", employee.id);
    Ok(())
}
