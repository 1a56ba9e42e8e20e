use axum::{Extension, Router, middleware, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tower_cookies::CookieManagerLayer;

use crate::{Res, api, config::Config, cors, info, spotify::SpotifyClient};

/// Builds the router with every endpoint wired to `config`.
///
/// Only the login and play routes go through the CORS gate.
pub fn app(config: Config) -> Router {
    let spotify = SpotifyClient::new(Arc::new(config));

    Router::new()
        .route(
            "/spotify/login",
            get(api::login).layer(middleware::from_fn(cors::cors)),
        )
        .route(
            "/spotify/play",
            get(api::play).layer(middleware::from_fn(cors::cors)),
        )
        .route("/callback/spotify", get(api::callback))
        .route("/spotify", get(api::me))
        .route("/health", get(api::health))
        .layer(Extension(spotify))
        .layer(CookieManagerLayer::new())
}

pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", config.server_addr, e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(config)).await?;
    Ok(())
}
