use serde::{Deserialize, Serialize};

/// A single code -> target association held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub code: String,
    pub target: String,
}

/// Response body for `GET /shorten/*url`.
///
/// Fields serialize in PascalCase (`Original`, `ShortCode`, `ShortenedUrl`),
/// the published contract of the shorten endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShortenResponse {
    pub original: String,
    pub short_code: String,
    pub shortened_url: String,
}
