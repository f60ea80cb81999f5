//! HTTP client for the postcodes.io bulk endpoint

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;

use super::error::LookupError;
use super::types::{BulkLookupRequest, BulkLookupResponse, DEFAULT_ENDPOINT, Outcome};
use crate::config::GeocoderConfig;
use crate::core::batch::Batch;

/// Anything that can turn one batch into one outcome per postcode
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Look up every code of `batch` with a single request
    async fn lookup(&self, batch: &Batch) -> Result<Vec<Outcome>, LookupError>;
}

/// Client for `POST https://api.postcodes.io/postcodes`
#[derive(Debug, Clone)]
pub struct PostcodesIoClient {
    client: Client,
    endpoint: String,
}

impl PostcodesIoClient {
    /// Build a client from the geocoder configuration
    pub fn new(config: &GeocoderConfig) -> Result<Self, LookupError> {
        Self::with_settings(
            &config.endpoint,
            Duration::from_secs(config.timeout),
            config.max_redirects,
        )
    }

    /// Build a client against an explicit endpoint
    pub fn with_settings(
        endpoint: impl Into<String>,
        timeout: Duration,
        max_redirects: usize,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(max_redirects))
            .build()
            .map_err(|e| {
                LookupError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for PostcodesIoClient {
    fn default() -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl LookupClient for PostcodesIoClient {
    async fn lookup(&self, batch: &Batch) -> Result<Vec<Outcome>, LookupError> {
        let body = serde_json::to_vec(&BulkLookupRequest {
            postcodes: &batch.codes,
        })
        .map_err(|e| LookupError::configuration(format!("Failed to encode request: {}", e)))?;

        debug!(
            batch_index = batch.index,
            batch_size = batch.len(),
            endpoint = %self.endpoint,
            "Sending bulk lookup"
        );

        // Non-2xx statuses are not errors here; the payload decides.
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "text/plain")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Bulk lookup returned non-success status");
        }

        parse_lookup_response(&text, Some(status.as_u16()), batch)
    }
}

/// Parse a bulk lookup payload into outcomes for `batch`.
///
/// The payload must hold exactly one entry per requested code. Unmatched
/// entries fall back to the code at the same position of the batch when the
/// service omits `query`.
pub fn parse_lookup_response(
    text: &str,
    status: Option<u16>,
    batch: &Batch,
) -> Result<Vec<Outcome>, LookupError> {
    let response: BulkLookupResponse = serde_json::from_str(text)
        .map_err(|e| LookupError::response_parsing(status, e.to_string()))?;

    if response.result.len() != batch.len() {
        return Err(LookupError::response_parsing(
            status,
            format!(
                "expected {} results, got {}",
                batch.len(),
                response.result.len()
            ),
        ));
    }

    let outcomes = response
        .result
        .into_iter()
        .enumerate()
        .map(|(position, entry)| match entry.result {
            Some(record) => Outcome::Resolved {
                postcode: record.postcode,
                latitude: record.latitude,
                longitude: record.longitude,
            },
            None => {
                let query = entry
                    .query
                    .or_else(|| batch.codes.get(position).cloned())
                    .unwrap_or_default();
                Outcome::Unresolved { query }
            }
        })
        .collect();

    Ok(outcomes)
}
