//! Configuration management for the playlist generator CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default, so the CLI works against
//! a locally running backend without any configuration.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::preview::DEFAULT_ERROR_REVERT;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(50);

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory if it doesn't exist and loads variables from
/// `playgencli/.env` under the platform-specific local data directory:
/// - Linux: `~/.local/share/playgencli/.env`
/// - macOS: `~/Library/Application Support/playgencli/.env`
/// - Windows: `%LOCALAPPDATA%/playgencli/.env`
///
/// A missing `.env` file is not an error; the defaults apply.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file exists
/// but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Directory holding `.env` and the cache, e.g. `~/.local/share/playgencli`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playgencli");
    path
}

/// Returns the base URL of the playlist generator backend API.
///
/// Reads `PLAYGEN_API_URL` and falls back to [`DEFAULT_API_URL`]. A trailing
/// slash is removed so paths can be appended with `format!("{}/login", ..)`.
///
/// # Example
///
/// ```
/// let api = api_url(); // e.g., "http://localhost:8080/api"
/// ```
pub fn api_url() -> String {
    env::var("PLAYGEN_API_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// How long a preview button shows the error glyph before reverting to play.
///
/// Reads `PLAYGEN_PREVIEW_ERROR_REVERT_MS`; invalid values fall back to the
/// default of two seconds.
pub fn preview_error_revert() -> Duration {
    millis_from_env("PLAYGEN_PREVIEW_ERROR_REVERT_MS").unwrap_or(DEFAULT_ERROR_REVERT)
}

/// Delay between showing the spinner and handing a URL to the browser.
///
/// Reads `PLAYGEN_REDIRECT_DELAY_MS`, default 50 ms.
pub fn redirect_delay() -> Duration {
    millis_from_env("PLAYGEN_REDIRECT_DELAY_MS").unwrap_or(DEFAULT_REDIRECT_DELAY)
}

fn millis_from_env(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}
