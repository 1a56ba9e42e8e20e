use axum::{Extension, Json, extract::Query};
use tower_cookies::{
    Cookie, Cookies,
    cookie::{SameSite, time::Duration},
};

use crate::{
    api::ApiError,
    spotify::{SpotifyClient, SpotifyError},
    types::{CallbackParams, TrackItem},
    warning,
};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Lifetime of the access token cookie.
///
/// Fixed at three hours and independent of the `expires_in` Spotify reports
/// (usually one hour), so the cookie can outlive the token.
pub const COOKIE_MAX_AGE_SECS: i64 = 10800;

/// Completes the authorization-code flow.
///
/// 1. `error` present: 401 with the error text
/// 2. `code` missing: 400
/// 3. exchange the code; any failure is a 500
/// 4. set the `access_token` cookie and answer with the user's top tracks,
///    honouring the `time_range` and `limit` query parameters
///
/// A failed top tracks lookup is logged and answered with an empty list; the
/// login itself already succeeded at that point.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(spotify): Extension<SpotifyClient>,
    cookies: Cookies,
) -> Result<Json<Vec<TrackItem>>, ApiError> {
    if let Some(error) = params.error() {
        return Err(ApiError::Unauthorized(format!(
            "Spotify authorization error: {}",
            error
        )));
    }

    let Some(code) = params.code() else {
        return Err(ApiError::BadRequest("Authorization code not found"));
    };

    // TODO: compare `params.state` with a value remembered at login once
    // sessions exist.
    let token = spotify.exchange_code(code).await.map_err(|e| match e {
        SpotifyError::Status { .. } => ApiError::Internal("Failed to get access token from Spotify"),
        SpotifyError::Request(ref err) if err.is_decode() => {
            warning!("Error decoding token response: {}", e);
            ApiError::Internal("Internal server error")
        }
        _ => {
            warning!("Error performing token exchange request: {}", e);
            ApiError::Internal("Failed to exchange code for token")
        }
    })?;

    let top_tracks = match spotify
        .top_tracks(&token.access_token, &params.top_tracks())
        .await
    {
        Ok(res) => res.items,
        Err(e) => {
            warning!("Failed to fetch top tracks after login: {}", e);
            Vec::new()
        }
    };

    cookies.add(
        Cookie::build((ACCESS_TOKEN_COOKIE, token.access_token))
            .path("/")
            .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS))
            .secure(true)
            .same_site(SameSite::None)
            .build(),
    );

    Ok(Json(top_tracks))
}
