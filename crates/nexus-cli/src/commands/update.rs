//! Update command implementation.

use super::{describe_roster_error, open_repository, CommandResult};
use crate::image;
use nexus_model::{EmployeeDraft, EmployeeId, Gender};
use std::str::FromStr;

#[allow(clippy::too_many_arguments)]
pub fn run(
    data_dir: &str,
    id: &str,
    full_name: Option<String>,
    gender: Option<String>,
    dob: Option<String>,
    state: Option<String>,
    image: Option<String>,
    active: Option<bool>,
) -> CommandResult {
    let id = EmployeeId::parse(id)?;
    let mut repository = open_repository(data_dir)?;

    // Merge the supplied flags over the existing record so the draft
    // passes whole-record validation.
    let Some(existing) = repository.employees().iter().find(|e| e.id == id).cloned() else {
        // Unknown ids are a silent no-op, tolerating stale references.
        return Ok(());
    };

    let profile_image = match image {
        Some(arg) => image::image_reference(&arg)?,
        None => existing.profile_image,
    };
    let gender = match gender {
        Some(g) => Gender::from_str(&g)?,
        None => existing.gender,
    };
    let draft = EmployeeDraft {
        full_name: full_name.unwrap_or(existing.full_name),
        gender: Some(gender),
        dob: dob.unwrap_or(existing.dob),
        profile_image,
        state: state.unwrap_or(existing.state),
        is_active: active,
    };

    if repository
        .update(id.as_ref(), draft)
        .map_err(describe_roster_error)?
    {
        println!("Updated {}", id);
    }
    Ok(())
}
