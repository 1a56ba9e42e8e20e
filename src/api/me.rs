use axum::{Extension, Json};
use serde_json::Value;

use crate::{api::ApiError, info, spotify::SpotifyClient, warning};

/// Debug endpoint: obtains an app-only token and looks up `/me` with it.
///
/// The token lives only for this request.
pub async fn me(Extension(spotify): Extension<SpotifyClient>) -> Result<Json<Value>, ApiError> {
    let token = spotify.client_credentials().await.map_err(|e| {
        warning!("Error requesting client credentials token: {}", e);
        ApiError::Internal("Internal server error")
    })?;

    let (status, data) = spotify
        .current_user(&token.access_token)
        .await
        .map_err(|e| {
            warning!("Error performing /me request: {}", e);
            ApiError::Internal("Internal server error")
        })?;

    info!("Spotify /me answered {}: {}", status, data);
    Ok(Json(data))
}
