//! Allow-list CORS gate for the browser-facing routes.
//!
//! The gate only decorates responses. Requests from other origins are still
//! served; the browser refuses to hand the response to the page because the
//! allow-origin header is missing.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// Origins allowed to read responses with credentials.
pub const ALLOWED_ORIGINS: &[&str] = &["http://127.0.0.1:8132"];

/// axum middleware, wire it with `axum::middleware::from_fn(cors)`.
pub async fn cors(req: Request, next: Next) -> Response {
    let origin = req.headers().get(header::ORIGIN).cloned();
    let mut res = next.run(req).await;
    apply_cors_headers(origin.as_ref(), ALLOWED_ORIGINS, res.headers_mut());
    res
}

/// Writes the CORS headers for a request coming from `origin`.
///
/// `Access-Control-Allow-Origin` echoes `origin` only when it is listed in
/// `allowed`. `Access-Control-Allow-Credentials: true` and `Vary: Origin` are
/// always present.
pub fn apply_cors_headers(origin: Option<&HeaderValue>, allowed: &[&str], headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );

    if let Some(origin) = origin.filter(|o| is_allowed(o, allowed)) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
    }

    headers.append(header::VARY, HeaderValue::from_static("Origin"));
}

fn is_allowed(origin: &HeaderValue, allowed: &[&str]) -> bool {
    origin
        .to_str()
        .map(|o| allowed.contains(&o))
        .unwrap_or(false)
}
