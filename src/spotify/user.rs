use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    spotify::{SpotifyClient, SpotifyError},
    utils, warning,
};

impl SpotifyClient {
    /// Fetches the profile of the token owner as raw JSON.
    ///
    /// App-only tokens from [`SpotifyClient::client_credentials`] have no
    /// owner, so Spotify answers those with an error object; it is returned
    /// as-is together with the status.
    pub async fn current_user(&self, token: &str) -> Result<(StatusCode, Value), SpotifyError> {
        let res = self
            .http
            .get(self.api_endpoint("me"))
            .bearer_auth(token)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        match serde_json::from_str::<Value>(&body) {
            Ok(json) => Ok((status, json)),
            Err(e) => {
                warning!(
                    "Spotify /me answered {} with non-JSON body ({}): {}",
                    status,
                    e,
                    utils::truncate_body(&body, 512)
                );
                Err(SpotifyError::Status { status, body })
            }
        }
    }
}
