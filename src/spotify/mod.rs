//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify accounts service and Web API this
//! backend talks to. Every call is a single request with its own timeout; no
//! retries are attempted.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - authorization-code and client-credentials grants ([`auth`])
//! - `GET /me/top/tracks` - the user's top tracks ([`tracks`])
//! - `PUT /me/player/play` - start/resume playback ([`player`])
//! - `GET /me` - profile of the token owner ([`user`])
//!
//! All endpoints are taken from [`Config`], so tests can point the client at a
//! local stand-in for Spotify.

use std::{fmt, sync::Arc};

use reqwest::{Client, StatusCode};

use crate::config::Config;

pub mod auth;
pub mod player;
pub mod tracks;
pub mod user;

/// Errors returned by the Spotify client.
#[derive(Debug)]
pub enum SpotifyError {
    /// Network, timeout or body decoding failure.
    Request(reqwest::Error),
    /// Spotify answered 401.
    Unauthorized(String),
    /// Spotify answered a non-success status, with the response body.
    Status { status: StatusCode, body: String },
    /// Spotify answered a status the operation does not treat as success.
    UnexpectedStatus(StatusCode),
    /// A configured endpoint could not be parsed.
    InvalidUrl(String),
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::Request(e) => write!(f, "request to Spotify failed: {}", e),
            SpotifyError::Unauthorized(body) => write!(f, "Spotify rejected the token: {}", body),
            SpotifyError::Status { status, body } => {
                write!(f, "Spotify answered {}: {}", status, body)
            }
            SpotifyError::UnexpectedStatus(status) => {
                write!(f, "unexpected status from Spotify: {}", status)
            }
            SpotifyError::InvalidUrl(e) => write!(f, "invalid Spotify URL: {}", e),
        }
    }
}

impl std::error::Error for SpotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpotifyError::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::Request(err)
    }
}

/// Shared handle to the Spotify endpoints.
///
/// Cheap to clone; the underlying `reqwest::Client` keeps a connection pool
/// that all requests share.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Arc<Config>,
}

impl SpotifyClient {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn api_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url, path.trim_start_matches('/'))
    }
}
