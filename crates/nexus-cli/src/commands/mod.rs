//! Command implementations.

pub mod add;
pub mod delete;
pub mod export;
pub mod list;
pub mod login;
pub mod logout;
pub mod states;
pub mod stats;
pub mod toggle;
pub mod update;
pub mod whoami;

use crate::FilterArgs;
use nexus_roster::{FilterSpec, GenderFilter, Repository, RosterError, SessionGate, StatusFilter};
use nexus_store::{FileStore, StoreOptions};
use std::error::Error;
use std::str::FromStr;

/// Result type shared by all command handlers.
pub type CommandResult = Result<(), Box<dyn Error>>;

/// Opens the key-value store under the data directory.
pub fn open_store(data_dir: &str) -> Result<FileStore, Box<dyn Error>> {
    Ok(FileStore::open(data_dir, StoreOptions::default())?)
}

/// Opens the session gate for the data directory.
pub fn open_gate(data_dir: &str) -> Result<SessionGate<FileStore>, Box<dyn Error>> {
    Ok(SessionGate::open(open_store(data_dir)?)?)
}

/// Opens the repository after checking that somebody is signed in.
///
/// Every command except `login` goes through this gate; without a
/// session the caller is routed to the login flow instead.
pub fn open_repository(data_dir: &str) -> Result<Repository<FileStore>, Box<dyn Error>> {
    let gate = open_gate(data_dir)?;
    if gate.current().is_none() {
        return Err("not signed in; run 'nexus-hr login' first".into());
    }
    Ok(Repository::open(open_store(data_dir)?)?)
}

/// Parses the shared filter flags into a `FilterSpec`.
pub fn filter_spec(args: &FilterArgs) -> Result<FilterSpec, Box<dyn Error>> {
    Ok(FilterSpec {
        search: args.search.clone(),
        gender: GenderFilter::from_str(&args.gender)?,
        status: StatusFilter::from_str(&args.status)?,
    })
}

/// Renders a roster error for the terminal.
///
/// Validation failures list one message per violated field; a full store
/// names the corrective action instead of suggesting a retry.
pub fn describe_roster_error(e: RosterError) -> Box<dyn Error> {
    match e {
        RosterError::Invalid(errors) => {
            let mut message = String::from("validation failed:");
            for error in errors {
                message.push_str("\n  - ");
                message.push_str(&error.to_string());
            }
            message.into()
        }
        RosterError::Store(e) if e.is_storage_full() => {
            "storage quota exceeded; the change was not saved. \
             Free up space or avoid large embedded images."
                .into()
        }
        other => other.into(),
    }
}
