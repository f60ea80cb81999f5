//! Geocoder configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::batch::REMOTE_BATCH_CEILING;
use tracing_subscriber::EnvFilter;
use url::Url;

impl Validate for GeocoderConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| format!("Endpoint '{}' is not a valid URL: {}", self.endpoint, e))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Endpoint must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if self.batch_limit <= 1 {
            return Err(format!(
                "Batch limit must be greater than 1, got {}",
                self.batch_limit
            ));
        }

        if self.effective_batch_size() > REMOTE_BATCH_CEILING {
            return Err(format!(
                "Batch size {} exceeds the remote ceiling of {} postcodes",
                self.effective_batch_size(),
                REMOTE_BATCH_CEILING
            ));
        }

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
