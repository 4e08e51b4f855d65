//! Whoami command implementation.

use super::{open_gate, CommandResult};

pub fn run(data_dir: &str) -> CommandResult {
    let gate = open_gate(data_dir)?;
    match gate.current() {
        Some(session) => println!(
            "Signed in as {} <{}> (session {})",
            session.name, session.email, session.id
        ),
        None => println!("Not signed in"),
    }
    Ok(())
}
