use axum::{Extension, extract::Query, http::StatusCode};
use tower_cookies::Cookies;

use crate::{
    api::{ACCESS_TOKEN_COOKIE, ApiError},
    spotify::SpotifyClient,
    types::PlayParams,
    warning,
};

/// Starts or resumes playback for the user owning the `access_token` cookie.
///
/// `context_uri` is accepted but the command is sent with an empty body, so
/// Spotify resumes whatever the active device had queued.
pub async fn play(
    Query(params): Query<PlayParams>,
    Extension(spotify): Extension<SpotifyClient>,
    cookies: Cookies,
) -> Result<StatusCode, ApiError> {
    let Some(token) = cookies.get(ACCESS_TOKEN_COOKIE) else {
        return Err(ApiError::BadRequest("Token not found"));
    };

    if let Some(context_uri) = params.context_uri.as_deref().filter(|c| !c.is_empty()) {
        warning!(
            "Ignoring context_uri {}, playback is resumed without a body",
            context_uri
        );
    }

    spotify
        .start_playback(token.value(), None)
        .await
        .map_err(|e| {
            warning!("Failed to start playback: {}", e);
            ApiError::Internal("Internal server error")
        })?;

    Ok(StatusCode::OK)
}
