//! # API Module
//!
//! HTTP endpoints served to the browser.
//!
//! ## Endpoints
//!
//! - [`login`] - `GET /spotify/login`, redirects to the Spotify consent page
//! - [`callback`] - `GET /callback/spotify`, exchanges the authorization code,
//!   stores the access token in a cookie and answers with the top tracks
//! - [`play`] - `GET /spotify/play`, starts or resumes playback with the token
//!   from the `access_token` cookie
//! - [`me`] - `GET /spotify`, app-only token plus profile lookup, for debugging
//! - [`health`] - `GET /health`
//!
//! Handlers receive the shared [`SpotifyClient`](crate::spotify::SpotifyClient)
//! through an `Extension` layer and report failures as [`ApiError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

mod callback;
mod health;
mod login;
mod me;
mod play;

pub use callback::{ACCESS_TOKEN_COOKIE, COOKIE_MAX_AGE_SECS, callback};
pub use health::health;
pub use login::login;
pub use me::me;
pub use play::play;

/// Error answered to the browser.
///
/// Details of upstream failures are logged server-side; the browser only
/// gets a short message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or malformed input from the client (400).
    BadRequest(&'static str),
    /// Spotify refused the authorization (401).
    Unauthorized(String),
    /// Upstream or internal failure (500).
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
