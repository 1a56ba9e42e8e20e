use std::time::Duration;

use reqwest::{StatusCode, Url};

use crate::{spotify::SpotifyClient, spotify::SpotifyError, types::Token, utils, warning};

pub const TOKEN_TIMEOUT: Duration = Duration::from_secs(10);

impl SpotifyClient {
    /// Builds the Spotify consent URL the browser is redirected to.
    ///
    /// # Arguments
    ///
    /// * `state` - Opaque value Spotify echoes back to the callback
    ///
    /// # Errors
    ///
    /// Returns [`SpotifyError::InvalidUrl`] if the configured authorization
    /// URL cannot be parsed.
    pub fn authorize_url(&self, state: &str) -> Result<Url, SpotifyError> {
        let config = self.config();
        Url::parse_with_params(
            &config.auth_url,
            &[
                ("response_type", "code"),
                ("client_id", config.client_id.as_str()),
                ("scope", config.scope.as_str()),
                ("redirect_uri", config.redirect_uri.as_str()),
                ("state", state),
            ],
        )
        .map_err(|e| SpotifyError::InvalidUrl(format!("{}: {}", config.auth_url, e)))
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Completes the authorization-code flow by posting the code together with
    /// the client credentials to the token endpoint.
    ///
    /// # Errors
    ///
    /// - [`SpotifyError::Status`] if Spotify answers anything but 200; the
    ///   status and body are logged
    /// - [`SpotifyError::Request`] on network failure, timeout or a body that
    ///   is not a token
    ///
    /// # Example
    ///
    /// ```
    /// let token = client.exchange_code("AQA...auth_code").await?;
    /// println!("Access token: {}", token.access_token);
    /// ```
    pub async fn exchange_code(&self, code: &str) -> Result<Token, SpotifyError> {
        let config = self.config();
        self.request_token(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .await
    }

    /// Requests an app-only token with the client-credentials grant.
    pub async fn client_credentials(&self) -> Result<Token, SpotifyError> {
        let config = self.config();
        self.request_token(&[
            ("grant_type", "client_credentials"),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
        ])
        .await
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<Token, SpotifyError> {
        // `form` sets Content-Type: application/x-www-form-urlencoded
        let res = self
            .http
            .post(&self.config().token_url)
            .form(form)
            .timeout(TOKEN_TIMEOUT)
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await.unwrap_or_default();
            warning!(
                "Spotify token exchange error: {}, body: {}",
                status,
                utils::truncate_body(&body, 512)
            );
            return Err(SpotifyError::Status { status, body });
        }

        Ok(res.json::<Token>().await?)
    }
}
