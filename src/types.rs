use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_TIME_RANGE: &str = "long_term";
pub const DEFAULT_LIMIT: &str = "10";

/// Token answered by the Spotify accounts service.
///
/// Client-credentials grants carry neither refresh token nor scope, so every
/// field falls back to its default when missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: String,
    pub scope: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<TrackItem>,
}

/// Missing or `null` fields decode to their zero value; local files come
/// back with `"id": null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_ms: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of the start/resume playback request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayOptions {
    /// `spotify:album:...`, `spotify:playlist:...` and the like.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub uris: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<PlayOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play: Option<bool>,
}

impl PlayOptions {
    pub fn with_context_uri(context_uri: impl Into<String>) -> Self {
        Self {
            context_uri: Some(context_uri.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayOffset {
    /// 0-indexed position of the item in the context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Top tracks selection forwarded from the inbound request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopTracksQuery {
    pub time_range: Option<String>,
    pub limit: Option<String>,
}

impl TopTracksQuery {
    pub fn time_range(&self) -> &str {
        non_empty(&self.time_range).unwrap_or(DEFAULT_TIME_RANGE)
    }

    pub fn limit(&self) -> &str {
        non_empty(&self.limit).unwrap_or(DEFAULT_LIMIT)
    }
}

/// Query parameters Spotify appends to the redirect URI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
    pub state: Option<String>,
    pub time_range: Option<String>,
    pub limit: Option<String>,
}

impl CallbackParams {
    pub fn code(&self) -> Option<&str> {
        non_empty(&self.code)
    }

    pub fn error(&self) -> Option<&str> {
        non_empty(&self.error)
    }

    pub fn top_tracks(&self) -> TopTracksQuery {
        TopTracksQuery {
            time_range: self.time_range.clone(),
            limit: self.limit.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayParams {
    pub context_uri: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
