use std::time::Duration;

use reqwest::{StatusCode, header};

use crate::{
    spotify::{SpotifyClient, SpotifyError},
    types::PlayOptions,
    utils, warning,
};

pub const PLAYBACK_TIMEOUT: Duration = Duration::from_secs(5);

impl SpotifyClient {
    /// Starts or resumes playback on the user's active device.
    ///
    /// Without `options` the request body is empty and Spotify resumes the
    /// current context. Spotify signals success with 204 No Content; every
    /// other status, including 200, is reported as
    /// [`SpotifyError::UnexpectedStatus`].
    pub async fn start_playback(
        &self,
        token: &str,
        options: Option<&PlayOptions>,
    ) -> Result<(), SpotifyError> {
        let req = self
            .http
            .put(self.api_endpoint("me/player/play"))
            .bearer_auth(token)
            .timeout(PLAYBACK_TIMEOUT);
        let req = match options {
            Some(options) => req.json(options),
            None => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Vec::new()),
        };

        let res = req.send().await?;

        let status = res.status();
        if status != StatusCode::NO_CONTENT {
            let body = res.text().await.unwrap_or_default();
            warning!(
                "Spotify /me/player/play error: {}, body: {}",
                status,
                utils::truncate_body(&body, 512)
            );
            return Err(SpotifyError::UnexpectedStatus(status));
        }

        Ok(())
    }
}
