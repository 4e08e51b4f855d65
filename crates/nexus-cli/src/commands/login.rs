//! Login command implementation.

use super::{open_gate, CommandResult};
use std::thread;
use std::time::Duration;

pub fn run(data_dir: &str, name: &str, email: &str) -> CommandResult {
    let mut gate = open_gate(data_dir)?;

    // No credential check; a fixed delay stands in for the
    // authentication round trip.
    thread::sleep(Duration::from_millis(800));

    let session = gate.login(name, email)?;
    println!("Signed in as {} <{}>", session.name, session.email);
    Ok(())
}
