use rand::{Rng, distr::Alphanumeric};

pub const STATE_LENGTH: usize = 32;

/// Random opaque value sent as the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

/// Reads at most `limit` characters of an upstream body for logging.
pub fn truncate_body(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
