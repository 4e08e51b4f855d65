//! Sign-in session lifecycle.

use chrono::Utc;
use nexus_model::Session;
use nexus_store::{RecordStore, StoreError};

/// Store key holding the signed-in session.
pub const AUTH_USER_KEY: &str = "auth_user";

/// Name substituted when login is given an empty name.
pub const DEFAULT_NAME: &str = "Admin User";
/// Email substituted when login is given an empty email.
pub const DEFAULT_EMAIL: &str = "admin@nexushr.com";

/// Guards access to the roster: absence of a current session routes
/// callers to the login flow instead of any other operation.
///
/// Login always succeeds; no credential is verified. The session is
/// persisted on login and removed on logout.
pub struct SessionGate<S: RecordStore> {
    store: S,
    current: Option<Session>,
}

impl<S: RecordStore> SessionGate<S> {
    /// Opens the gate, restoring any persisted session.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let current = store
            .load(AUTH_USER_KEY)?
            .and_then(|value| serde_json::from_value(value).ok());
        Ok(Self { store, current })
    }

    /// Signs in, substituting the fixed defaults for empty inputs, and
    /// persists the fresh session. Always succeeds.
    pub fn login(&mut self, name: &str, email: &str) -> Result<&Session, StoreError> {
        let session = Session {
            id: Utc::now().timestamp_millis().to_string(),
            name: if name.trim().is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                name.to_string()
            },
            email: if email.trim().is_empty() {
                DEFAULT_EMAIL.to_string()
            } else {
                email.to_string()
            },
        };
        let value = serde_json::to_value(&session)?;
        self.store.save(AUTH_USER_KEY, &value)?;
        Ok(self.current.insert(session))
    }

    /// Signs out, clearing the active session and removing it from the
    /// store. A no-op when nobody is signed in.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.current = None;
        self.store.remove(AUTH_USER_KEY)
    }

    /// The active session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}
