//! Configuration management for the geocoder
//!
//! This module handles loading and validation of configuration.
//! Precedence, lowest first: defaults, YAML file, environment, command line.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use loader::EnvOverrides;
pub use validation::Validate;

use crate::utils::error::{GeocoderError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration struct for the geocoder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Lookup and batching configuration
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GeocoderError::config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| GeocoderError::config(format!("Failed to parse config: {}", e)))
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        EnvOverrides::from_env()?.apply(&mut config);
        Ok(config)
    }

    /// Defaults, then the optional file, then the environment
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok()).await
    }

    /// Like [`Config::load`], reading variables through `lookup`
    ///
    /// A variable always wins over the file, even when it names the default.
    pub async fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = path {
            config = Self::from_file(path).await?;
        }

        EnvOverrides::read_with(lookup)?.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.geocoder
            .validate()
            .map_err(|e| GeocoderError::config(format!("Geocoder config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| GeocoderError::config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GeocoderError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
