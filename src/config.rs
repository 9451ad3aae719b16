//! Configuration management for fairshuffle.
//!
//! Configuration values come from environment variables and an optional `.env`
//! file. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `fairshuffle` data directory if it doesn't exist. A missing
/// `.env` file is not an error: every key either has a default or is optional.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/fairshuffle/.env`
/// - macOS: `~/Library/Application Support/fairshuffle/.env`
/// - Windows: `%LOCALAPPDATA%/fairshuffle/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Platform-specific data directory for fairshuffle (`<data_local_dir>/fairshuffle`).
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("fairshuffle");
    path
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth token endpoint used to refresh cached tokens.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, falling back to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the client ID registered with Spotify, if configured.
///
/// Only needed to refresh an expired cached token.
pub fn spotify_client_id() -> Option<String> {
    non_empty_var("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns a static bearer token from `SPOTIFY_ACCESS_TOKEN`, if set.
///
/// When present it takes precedence over the cached token file.
pub fn spotify_access_token() -> Option<String> {
    non_empty_var("SPOTIFY_ACCESS_TOKEN")
}

/// Returns the `tracing` filter directive from `FAIRSHUFFLE_LOG` (default `warn`).
pub fn log_filter() -> String {
    non_empty_var("FAIRSHUFFLE_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
