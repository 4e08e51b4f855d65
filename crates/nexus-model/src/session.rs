//! Signed-in session type.

use serde::{Deserialize, Serialize};

/// The signed-in actor.
///
/// No password or credential is verified or stored; the session exists
/// purely to gate access to the roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session identifier (time-derived).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}
