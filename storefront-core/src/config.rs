//! Configuration management
//!
//! Settings live in settings.json in the store directory:
//! ```json
//! {
//!   "app": { "keyPrefix": "ws_", "checkoutDelayMs": 350, "seedCatalog": true }
//! }
//! ```
//! Sections and fields this crate does not know about are kept on save.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::adapters::simulated::DEFAULT_DELAY;
use crate::services::DEFAULT_KEY_PREFIX;

const SETTINGS_FILE: &str = "settings.json";

pub const KEY_PREFIX_ENV: &str = "STOREFRONT_KEY_PREFIX";
pub const CHECKOUT_DELAY_ENV: &str = "STOREFRONT_CHECKOUT_DELAY_MS";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    checkout_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed_catalog: Option<bool>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace prepended to every store key
    pub key_prefix: String,
    /// Simulated payment processing time
    pub checkout_delay: Duration,
    /// Write the built-in catalog into an empty store on open
    pub seed_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            checkout_delay: DEFAULT_DELAY,
            seed_catalog: true,
        }
    }
}

impl Config {
    /// Load config from the store directory
    ///
    /// A missing or unreadable settings file yields defaults. Environment
    /// variables override the file.
    pub fn load(store_dir: &Path) -> Result<Self> {
        let raw = read_settings(store_dir)?;
        let defaults = Self::default();

        let key_prefix = std::env::var(KEY_PREFIX_ENV)
            .ok()
            .or(raw.app.key_prefix)
            .unwrap_or(defaults.key_prefix);

        let delay_ms = std::env::var(CHECKOUT_DELAY_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .or(raw.app.checkout_delay_ms);

        Ok(Self {
            key_prefix,
            checkout_delay: delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.checkout_delay),
            seed_catalog: raw.app.seed_catalog.unwrap_or(defaults.seed_catalog),
        })
    }

    /// Write a settings.json holding the defaults when the store has none
    ///
    /// Returns whether a file was written. Environment overrides are not
    /// persisted.
    pub fn write_defaults_if_missing(store_dir: &Path) -> Result<bool> {
        if store_dir.join(SETTINGS_FILE).exists() {
            return Ok(false);
        }
        Self::default().save(store_dir)?;
        Ok(true)
    }

    /// Save config to the store directory, keeping fields it does not manage
    pub fn save(&self, store_dir: &Path) -> Result<()> {
        let mut settings = read_settings(store_dir)?;

        settings.app.key_prefix = Some(self.key_prefix.clone());
        settings.app.checkout_delay_ms = Some(self.checkout_delay.as_millis() as u64);
        settings.app.seed_catalog = Some(self.seed_catalog);

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(store_dir.join(SETTINGS_FILE), content)?;
        Ok(())
    }
}

fn read_settings(store_dir: &Path) -> Result<SettingsFile> {
    let settings_path = store_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("[storefront] Ignoring unreadable {}: {}", SETTINGS_FILE, e);
        SettingsFile::default()
    }))
}
