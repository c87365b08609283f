//! Auth service - signup and login against the local credential map

use std::collections::BTreeMap;

use crate::domain::credential::MIN_PASSWORD_LEN;
use crate::domain::result::{Error, Result};
use crate::domain::{normalize_email, Credential};
use crate::services::storage::{keys, JsonStore};

type CredentialMap = BTreeMap<String, Credential>;

/// Account creation and password checks
///
/// Does not touch the session; callers sign the shopper in after a
/// successful signup or login.
#[derive(Clone)]
pub struct AuthService {
    store: JsonStore,
}

impl AuthService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Create an account and return the normalized email
    pub fn signup(&self, email: &str, password: &str) -> Result<String> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(Error::validation("Enter a valid email address."));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::validation(format!(
                "Password must be at least {} characters.",
                MIN_PASSWORD_LEN
            )));
        }

        let mut users = self.users();
        if users.contains_key(&email) {
            return Err(Error::conflict("Account already exists. Please log in."));
        }

        users.insert(email.clone(), Credential::new(email.clone(), password));
        self.store.set(keys::USERS, &users)?;
        Ok(email)
    }

    /// Check a password and return the normalized email
    pub fn login(&self, email: &str, password: &str) -> Result<String> {
        let email = normalize_email(email);
        let users = self.users();
        let credential = users
            .get(&email)
            .ok_or_else(|| Error::not_found("No account found. Please sign up first."))?;

        if !credential.verify(password) {
            return Err(Error::auth("Invalid email or password."));
        }
        Ok(email)
    }

    /// Whether an account exists for this email
    pub fn exists(&self, email: &str) -> bool {
        self.users().contains_key(&normalize_email(email))
    }

    fn users(&self) -> CredentialMap {
        self.store.get(keys::USERS, CredentialMap::new())
    }
}
