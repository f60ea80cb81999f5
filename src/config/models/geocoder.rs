//! Geocoder configuration

use super::*;
use crate::core::batch::BatchSizing;
use crate::core::pipeline::FailurePolicy;
use serde::{Deserialize, Serialize};

/// Lookup and batching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Bulk lookup endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Nominal number of postcodes per request
    #[serde(default = "default_batch_limit")]
    pub batch_limit: usize,
    /// How the nominal limit maps to the real batch size
    #[serde(default)]
    pub batch_sizing: BatchSizing,
    /// Behaviour when one batch lookup fails
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Redirects followed per request
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            batch_limit: default_batch_limit(),
            batch_sizing: BatchSizing::default(),
            failure_policy: FailurePolicy::default(),
            timeout: default_timeout(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl GeocoderConfig {
    /// Largest number of postcodes sent in one request
    pub fn effective_batch_size(&self) -> usize {
        self.batch_sizing.effective_size(self.batch_limit)
    }
}
