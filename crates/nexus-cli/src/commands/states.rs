//! States command implementation.

use super::CommandResult;
use nexus_model::US_STATES;

pub fn run() -> CommandResult {
    for state in US_STATES {
        println!("{}", state);
    }
    Ok(())
}
