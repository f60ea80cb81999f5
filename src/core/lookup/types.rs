//! Wire types for the bulk lookup endpoint and per-postcode outcomes

use serde::{Deserialize, Serialize};

/// Bulk lookup endpoint of postcodes.io
pub const DEFAULT_ENDPOINT: &str = "https://api.postcodes.io/postcodes";

/// Written to both coordinate columns when a postcode has no match
pub const NOT_FOUND_MARKER: &str = "not a valid postcode";

/// Request body: `{"postcodes": [...]}`
#[derive(Debug, Serialize)]
pub struct BulkLookupRequest<'a> {
    pub postcodes: &'a [String],
}

/// Response body: `{"status": 200, "result": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct BulkLookupResponse {
    #[serde(default)]
    pub status: Option<u16>,
    pub result: Vec<BulkLookupEntry>,
}

/// One element of the response, positionally aligned with the request
#[derive(Debug, Clone, Deserialize)]
pub struct BulkLookupEntry {
    #[serde(default)]
    pub query: Option<String>,
    /// `null` when the service found no match
    #[serde(default)]
    pub result: Option<PostcodeRecord>,
}

/// The fields of a matched postcode we keep; the service sends many more
#[derive(Debug, Clone, Deserialize)]
pub struct PostcodeRecord {
    pub postcode: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Result of looking up one postcode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Matched; carries the canonical postcode returned by the service
    Resolved {
        postcode: String,
        latitude: Option<f64>,
        longitude: Option<f64>,
    },
    /// No match; carries the string that was queried
    Unresolved { query: String },
}

impl Outcome {
    pub fn resolved(postcode: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::Resolved {
            postcode: postcode.into(),
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    pub fn unresolved(query: impl Into<String>) -> Self {
        Self::Unresolved {
            query: query.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Postcode column value
    pub fn code(&self) -> &str {
        match self {
            Self::Resolved { postcode, .. } => postcode,
            Self::Unresolved { query } => query,
        }
    }
}
