//! CLI command implementations

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod logs;
pub mod orders;
pub mod products;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use storefront_core::{EntryPoint, LoggingService, StorefrontContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (never blocks a command)
pub fn get_logger() -> Option<LoggingService> {
    let store_dir = get_store_dir().ok()?;
    std::fs::create_dir_all(&store_dir).ok()?;
    LoggingService::new(&store_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Record that a command ran, ignoring any errors
pub fn log_command(logger: &Option<LoggingService>, command: &str) {
    if let Some(l) = logger {
        let _ = l.log_command(command);
    }
}

/// Record a failed command, ignoring any errors
pub fn log_failure(logger: &Option<LoggingService>, command: &str, message: &str, details: &str) {
    if let Some(l) = logger {
        let _ = l.log_command_failed(command, message, details);
    }
}

/// Store directory from STOREFRONT_DIR or ~/.storefront
pub fn get_store_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("STOREFRONT_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".storefront"))
        .ok_or_else(|| anyhow!("Could not find home directory; set STOREFRONT_DIR"))
}

/// Open the store context
pub fn get_context() -> Result<StorefrontContext> {
    let store_dir = get_store_dir()?;
    StorefrontContext::new(&store_dir).context("Failed to open the store")
}

/// Fail instead of prompting when stdin is not a terminal
pub fn ensure_interactive(flag: &str) -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) {
        return Err(anyhow!("Missing --{} (stdin is not a terminal)", flag));
    }
    Ok(())
}

/// Email of the signed-in shopper
pub fn require_login(ctx: &StorefrontContext) -> Result<String> {
    Ok(ctx.session_service.require_email()?)
}
