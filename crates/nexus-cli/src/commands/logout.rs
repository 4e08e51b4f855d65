//! Logout command implementation.

use super::{open_gate, CommandResult};

pub fn run(data_dir: &str) -> CommandResult {
    let mut gate = open_gate(data_dir)?;
    gate.logout()?;
    println!("Signed out");
    Ok(())
}
