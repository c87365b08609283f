//! Key/value store port - persistent storage abstraction

use crate::domain::result::Result;

/// String-keyed, string-valued persistent storage
///
/// This is the only thing the services know about storage. Values are
/// opaque strings here; JSON encoding lives one layer up in `JsonStore`.
/// Calls are synchronous and each one is independent: there are no
/// transactions spanning several keys.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key has never been written or was removed
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a value
    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently stored, in ascending order
    fn keys(&self) -> Result<Vec<String>>;

    /// Delete every key
    fn clear(&self) -> Result<()>;
}
