use std::time::Duration;

use reqwest::StatusCode;

use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::{TopTracksQuery, TopTracksResponse},
    utils, warning,
};

pub const TOP_TRACKS_TIMEOUT: Duration = Duration::from_secs(20);

impl SpotifyClient {
    /// Retrieves the current user's top tracks.
    ///
    /// # Arguments
    ///
    /// * `token` - User access token
    /// * `query` - `time_range` (default `long_term`) and `limit` (default `10`),
    ///   forwarded verbatim
    ///
    /// # Errors
    ///
    /// Non-200 answers are logged with their body and reported as
    /// [`SpotifyError::Unauthorized`] for 401 and [`SpotifyError::Status`]
    /// otherwise. Network and decoding failures are [`SpotifyError::Request`].
    pub async fn top_tracks(
        &self,
        token: &str,
        query: &TopTracksQuery,
    ) -> Result<TopTracksResponse, SpotifyError> {
        let res = self
            .http
            .get(self.api_endpoint("me/top/tracks"))
            .query(&[("time_range", query.time_range()), ("limit", query.limit())])
            .bearer_auth(token)
            .timeout(TOP_TRACKS_TIMEOUT)
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            warning!(
                "Spotify /me/top/tracks error: {}, body: {}",
                status,
                utils::truncate_body(&body, 512)
            );
            return Err(match status {
                StatusCode::UNAUTHORIZED => SpotifyError::Unauthorized(body),
                _ => SpotifyError::Status { status, body },
            });
        }

        Ok(res.json::<TopTracksResponse>().await?)
    }
}
