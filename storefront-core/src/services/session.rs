//! Session service - who is signed in

use crate::domain::result::{Error, Result};
use crate::domain::{normalize_email, Session};
use crate::services::storage::{keys, JsonStore};

/// Message shown when a page needs a signed-in shopper
pub const LOGIN_REQUIRED: &str = "Please log in to continue.";

/// Reads and writes the single active session for a store profile
#[derive(Clone)]
pub struct SessionService {
    store: JsonStore,
}

impl SessionService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The active session, if any
    ///
    /// A session record without an email counts as signed out.
    pub fn current(&self) -> Option<Session> {
        self.store
            .get::<Option<Session>>(keys::SESSION, None)
            .filter(|s| !s.email.trim().is_empty())
    }

    /// Email of the signed-in shopper, if any
    pub fn current_email(&self) -> Option<String> {
        self.current().map(|s| s.email)
    }

    /// Replace the active session with the normalized email
    pub fn set_session(&self, email: &str) -> Result<Session> {
        let session = Session::new(normalize_email(email));
        self.store.set(keys::SESSION, &session)?;
        Ok(session)
    }

    /// Sign out. Carts and orders stay in the store.
    pub fn clear_session(&self) -> Result<()> {
        self.store.remove(keys::SESSION)
    }

    /// Email of the signed-in shopper or an `Auth` error
    pub fn require_email(&self) -> Result<String> {
        self.current_email()
            .ok_or_else(|| Error::auth(LOGIN_REQUIRED))
    }
}
