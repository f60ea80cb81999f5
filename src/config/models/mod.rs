//! Configuration data models
//!
//! This module defines all configuration structures used by the geocoder.

pub mod geocoder;
pub mod logging;

// Re-export all configuration types
pub use geocoder::*;
pub use logging::*;

use crate::core::batch::DEFAULT_BATCH_LIMIT;
use crate::core::lookup::DEFAULT_ENDPOINT;

/// Default bulk lookup endpoint
pub fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Default nominal batch limit
pub fn default_batch_limit() -> usize {
    DEFAULT_BATCH_LIMIT
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default number of redirects followed per request
pub fn default_max_redirects() -> usize {
    10
}

pub fn default_log_level() -> String {
    "info".to_string()
}
