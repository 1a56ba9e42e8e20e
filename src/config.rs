//! Configuration management for the playback backend.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory (`spotplay/.env`)
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8132";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SCOPE: &str =
    "user-modify-playback-state user-read-private user-read-email user-top-read";

/// Loads environment variables from `.env` files.
///
/// Looks in the platform-specific local data directory first:
/// - Linux: `~/.local/share/spotplay/.env`
/// - macOS: `~/Library/Application Support/spotplay/.env`
/// - Windows: `%LOCALAPPDATA%/spotplay/.env`
///
/// and then in the current working directory. `dotenv` never overrides
/// variables that are already set, so the process environment always wins.
/// The data directory is created when missing so a `.env` can be dropped
/// there. Missing files are not an error; the server may be configured purely
/// through the environment.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or if an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let exists = async_fs::metadata(&path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if exists {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Location of the `.env` file in the local data directory.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotplay/.env");
    path
}

/// Runtime configuration of the server.
///
/// Endpoint URLs are configurable so the provider can be replaced by a local
/// stand-in.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to, e.g. `0.0.0.0:8132`.
    pub server_addr: String,
    pub client_id: String,
    pub client_secret: String,
    /// Must match the redirect URI registered with the Spotify application.
    pub redirect_uri: String,
    /// Space separated scopes requested at login.
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    /// Base of the Web API, without trailing slash.
    pub api_url: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `SPOTIFY_API_AUTH_CLIENT_ID` | required |
    /// | `SPOTIFY_API_AUTH_CLIENT_SECRET` | required |
    /// | `SPOTIFY_API_REDIRECT_URI` | required |
    /// | `SPOTIFY_API_AUTH_SCOPE` | [`DEFAULT_SCOPE`] |
    /// | `SPOTIFY_API_AUTH_URL` | [`DEFAULT_AUTH_URL`] |
    /// | `SPOTIFY_API_TOKEN_URL` | [`DEFAULT_TOKEN_URL`] |
    /// | `SPOTIFY_API_URL` | [`DEFAULT_API_URL`] |
    /// | `SERVER_ADDRESS` | [`DEFAULT_SERVER_ADDRESS`] |
    ///
    /// # Errors
    ///
    /// Returns `"<NAME> must be set"` for the first missing required variable.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| get(name).ok_or_else(|| format!("{} must be set", name));
        let optional = |name: &str, default: &str| get(name).unwrap_or_else(|| default.to_string());

        Ok(Config {
            server_addr: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_API_REDIRECT_URI")?,
            scope: optional("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }
}
