#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{
    Form, Router,
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::{Value, json};
use spotplay::config::{Config, DEFAULT_SCOPE};
use tokio::{net::TcpListener, sync::Mutex};

pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const REDIRECT_URI: &str = "http://127.0.0.1:8132/callback/spotify";

/// What the fake Spotify received.
#[derive(Debug, Default, Clone)]
pub struct Seen {
    pub token_form: Option<HashMap<String, String>>,
    pub token_content_type: Option<String>,
    pub top_tracks_query: Option<HashMap<String, String>>,
    pub top_tracks_auth: Option<String>,
    pub play_auth: Option<String>,
    pub play_content_type: Option<String>,
    pub play_body: Option<String>,
    pub me_auth: Option<String>,
}

/// Stand-in for the Spotify accounts service and Web API.
pub struct MockProvider {
    pub token_status: StatusCode,
    pub token_body: String,
    pub tracks_status: StatusCode,
    /// Raw body answered instead of the generated tracks.
    pub tracks_body: Option<String>,
    pub play_status: StatusCode,
    pub seen: Mutex<Seen>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            token_status: StatusCode::OK,
            token_body: json!({ "access_token": "T", "expires_in": 3600 }).to_string(),
            tracks_status: StatusCode::OK,
            tracks_body: None,
            play_status: StatusCode::NO_CONTENT,
            seen: Mutex::new(Seen::default()),
        }
    }
}

impl MockProvider {
    pub async fn seen(&self) -> Seen {
        self.seen.lock().await.clone()
    }
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn token(
    State(provider): State<Arc<MockProvider>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    {
        let mut seen = provider.seen.lock().await;
        seen.token_form = Some(form);
        seen.token_content_type = header_string(&headers, header::CONTENT_TYPE);
    }

    (
        provider.token_status,
        [(header::CONTENT_TYPE, "application/json")],
        provider.token_body.clone(),
    )
        .into_response()
}

async fn top_tracks(
    State(provider): State<Arc<MockProvider>>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let count: usize = query
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(0);
    {
        let mut seen = provider.seen.lock().await;
        seen.top_tracks_query = Some(query);
        seen.top_tracks_auth = header_string(&headers, header::AUTHORIZATION);
    }

    if provider.tracks_status != StatusCode::OK {
        let body = json!({ "error": { "status": provider.tracks_status.as_u16(), "message": "nope" } });
        return (provider.tracks_status, axum::Json(body)).into_response();
    }

    if let Some(body) = &provider.tracks_body {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response();
    }

    axum::Json(tracks_body(count)).into_response()
}

async fn play(
    State(provider): State<Arc<MockProvider>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    {
        let mut seen = provider.seen.lock().await;
        seen.play_auth = header_string(&headers, header::AUTHORIZATION);
        seen.play_content_type = header_string(&headers, header::CONTENT_TYPE);
        seen.play_body = Some(body);
    }

    provider.play_status.into_response()
}

async fn me(State(provider): State<Arc<MockProvider>>, headers: HeaderMap) -> Response {
    provider.seen.lock().await.me_auth = header_string(&headers, header::AUTHORIZATION);
    axum::Json(json!({ "id": "app-user", "display_name": "App" })).into_response()
}

/// Top tracks payload with the extra fields Spotify sends along.
pub fn tracks_body(count: usize) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "id": format!("t{}", i),
                "name": format!("Track {}", i),
                "uri": format!("spotify:track:t{}", i),
                "duration_ms": 1000 * i,
                "popularity": 42,
                "explicit": false
            })
        })
        .collect();
    json!({ "items": items, "total": count, "limit": count, "offset": 0 })
}

pub fn test_config(base: &str) -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        client_id: CLIENT_ID.to_string(),
        client_secret: CLIENT_SECRET.to_string(),
        redirect_uri: REDIRECT_URI.to_string(),
        scope: DEFAULT_SCOPE.to_string(),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: format!("{}/api/token", base),
        api_url: format!("{}/v1", base),
    }
}

/// Serves `provider` on an ephemeral port and returns a config pointing at it.
pub async fn spawn_provider(provider: MockProvider) -> (Config, Arc<MockProvider>) {
    let provider = Arc::new(provider);
    let router = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me/top/tracks", get(top_tracks))
        .route("/v1/me/player/play", put(play))
        .route("/v1/me", get(me))
        .with_state(Arc::clone(&provider));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (test_config(&format!("http://{}", addr)), provider)
}

/// Address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(res: Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
