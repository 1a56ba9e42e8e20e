use axum::{
    Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{api::ApiError, spotify::SpotifyClient, utils, warning};

/// Redirects the browser to the Spotify consent page with `302 Found`.
///
/// A fresh `state` is generated per call. It is not remembered, so the
/// callback cannot check it.
pub async fn login(Extension(spotify): Extension<SpotifyClient>) -> Result<Response, ApiError> {
    let state = utils::generate_state();

    let auth_url = spotify.authorize_url(&state).map_err(|e| {
        warning!("Error building Spotify authorization URL: {}", e);
        ApiError::Internal("Internal server error")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, auth_url.to_string())]).into_response())
}
