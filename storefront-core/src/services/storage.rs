//! JSON layer over the key/value store
//!
//! Every service reads and writes through `JsonStore`. Reads fail soft:
//! a missing key, an unreadable backend or a value that no longer decodes
//! all yield the caller's fallback. Writes go straight through; there is no
//! batching and no cross-key transaction.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::ports::KeyValueStore;

/// Key prefix shared with the web storefront
pub const DEFAULT_KEY_PREFIX: &str = "ws_";

/// Schema version this library reads and writes
pub const SCHEMA_VERSION: u32 = 1;

/// Storage key layout (before prefixing)
///
/// Per-user keys are namespaced by normalized email.
pub mod keys {
    use crate::domain::normalize_email;

    pub const USERS: &str = "users";
    pub const SESSION: &str = "session";
    pub const PRODUCTS: &str = "products";
    pub const SCHEMA_VERSION: &str = "schemaVersion";

    pub fn cart(email: &str) -> String {
        format!("cart:{}", normalize_email(email))
    }

    pub fn orders(email: &str) -> String {
        format!("orders:{}", normalize_email(email))
    }

    pub fn last_order(email: &str) -> String {
        format!("lastOrder:{}", normalize_email(email))
    }
}

/// Typed JSON access to a `KeyValueStore`
#[derive(Clone)]
pub struct JsonStore {
    backend: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl JsonStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    /// Full backend key for a logical key
    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Read and decode a value, returning `fallback` on any failure
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(e) => {
                eprintln!("[storefront] Using default for '{}': {}", self.full_key(key), e);
                fallback
            }
        }
    }

    /// Read and decode a value, surfacing decode failures
    ///
    /// `Ok(None)` means the key is absent.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let full_key = self.full_key(key);
        let Some(raw) = self.backend.get_raw(&full_key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| Error::StorageDecode {
                key: full_key,
                message: e.to_string(),
            })
    }

    /// Encode and write a value
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_raw(&self.full_key(key), &raw)
    }

    /// Delete a key
    pub fn remove(&self, key: &str) -> Result<()> {
        self.backend.remove(&self.full_key(key))
    }

    /// Logical keys (prefix stripped) owned by this store's namespace
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self
            .backend
            .keys()?
            .into_iter()
            .filter_map(|k| k.strip_prefix(&self.prefix).map(str::to_string))
            .collect())
    }

    /// Check the stored schema version, stamping fresh stores
    ///
    /// Fails when the store was written by a newer version of the library.
    pub fn ensure_schema_version(&self) -> Result<u32> {
        match self.try_get::<u32>(keys::SCHEMA_VERSION) {
            Ok(Some(version)) if version > SCHEMA_VERSION => Err(Error::Config(format!(
                "Store schema version {} is newer than supported version {}",
                version, SCHEMA_VERSION
            ))),
            Ok(Some(version)) => Ok(version),
            Ok(None) | Err(Error::StorageDecode { .. }) => {
                self.set(keys::SCHEMA_VERSION, &SCHEMA_VERSION)?;
                Ok(SCHEMA_VERSION)
            }
            Err(e) => Err(e),
        }
    }
}
