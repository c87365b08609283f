//! Credential domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LEN: usize = 6;

/// Stored password record for one email address
///
/// Records are keyed by normalized email in the `users` map. They are
/// written once at signup and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Normalized email. Older stores only kept it as the map key.
    #[serde(default)]
    pub email: String,
    #[serde(alias = "pwHash")]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: &str) -> Self {
        Self {
            email: email.into(),
            password_hash: hash_password(password),
            created_at: Utc::now(),
        }
    }

    /// Check a candidate password against the stored hash
    ///
    /// A 16-character hash was produced by the web storefront's fallback
    /// digest; those records are checked with the same digest so they keep
    /// working. New records are always SHA-256.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = if self.password_hash.len() == LEGACY_HASH_LEN {
            legacy_fnv1a_hex(password)
        } else {
            hash_password(password)
        };
        candidate.eq_ignore_ascii_case(&self.password_hash)
    }
}

/// Trim and lowercase an email so lookups are case-insensitive
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// SHA-256 of the raw password as lowercase hex
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

const LEGACY_HASH_LEN: usize = 16;
const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Two interleaved 32-bit FNV-1a accumulators, concatenated as hex.
///
/// Not a cryptographic hash. Only used to verify records created by
/// browsers that had no secure digest available. Input is hashed per UTF-16
/// code unit to match what those browsers stored.
pub fn legacy_fnv1a_hex(text: &str) -> String {
    let mut h1 = FNV_OFFSET;
    let mut h2 = FNV_OFFSET ^ GOLDEN_RATIO;
    for unit in text.encode_utf16() {
        let c = u32::from(unit);
        h1 ^= c;
        h1 = h1.wrapping_mul(FNV_PRIME);
        h2 ^= c;
        h2 = h2.wrapping_mul(FNV_PRIME);
    }
    format!("{:08x}{:08x}", h1, h2)
}
