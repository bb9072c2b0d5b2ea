//! Configuration management for spotlike.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the Spotify
//! credentials and the few runtime parameters the tool understands.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Res, errors::SpotlikeError, types::Credentials};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_PLAYBACK_TOLERANCE_SECS: u64 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotlike/.env`. Variables that are already set
/// in the process environment are left untouched.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotlike/.env`
/// - macOS: `~/Library/Application Support/spotlike/.env`
/// - Windows: `%LOCALAPPDATA%/spotlike/.env`
///
/// # Returns
///
/// Returns `Ok(())` when the file was loaded or does not exist, or an error
/// string if directory creation or parsing fails.
///
/// # Example
///
/// ```
/// use spotlike::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        log::debug!("no env file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Returns the path of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlike/.env");
    path
}

/// Returns the three secrets needed to obtain an access token.
///
/// Reads `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` and `SPOTIFY_REFRESH_TOKEN`.
/// The refresh token is long-lived and is obtained once, outside of this tool,
/// with the scopes listed in `.env.example`.
///
/// # Errors
///
/// Returns [`SpotlikeError::MissingConfig`] naming the first variable that is
/// unset or empty.
///
/// # Security Note
///
/// The client secret and refresh token should be kept confidential and never
/// exposed in logs or version control.
pub fn credentials() -> Res<Credentials> {
    Ok(Credentials {
        client_id: required("SPOTIFY_CLIENT_ID")?,
        client_secret: required("SPOTIFY_CLIENT_SECRET")?,
        refresh_token: required("SPOTIFY_REFRESH_TOKEN")?,
    })
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to [`DEFAULT_API_URL`]. A trailing
/// slash is stripped so endpoint paths can be appended directly.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL")
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Returns the Spotify OAuth token URL used for the refresh grant.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, falling back to [`DEFAULT_TOKEN_URL`].
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

/// Returns how long a paused playback still counts as "currently playing".
///
/// Reads `SPOTLIKE_PLAYBACK_TOLERANCE_SECS`; unparsable values fall back to
/// [`DEFAULT_PLAYBACK_TOLERANCE_SECS`].
pub fn playback_tolerance_secs() -> u64 {
    optional("SPOTLIKE_PLAYBACK_TOLERANCE_SECS")
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PLAYBACK_TOLERANCE_SECS)
}

fn required(key: &'static str) -> Res<String> {
    optional(key).ok_or(SpotlikeError::MissingConfig(key))
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
