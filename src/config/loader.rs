//! Configuration loading utilities
//!
//! This module provides utilities for loading configuration from environment variables.

use super::Config;
use super::models::*;
use crate::core::batch::BatchSizing;
use crate::core::pipeline::FailurePolicy;
use crate::utils::error::{GeocoderError, Result};
use std::env;
use std::str::FromStr;

pub const ENV_ENDPOINT: &str = "GEOCODER_ENDPOINT";
pub const ENV_BATCH_LIMIT: &str = "GEOCODER_BATCH_LIMIT";
pub const ENV_BATCH_SIZING: &str = "GEOCODER_BATCH_SIZING";
pub const ENV_FAILURE_POLICY: &str = "GEOCODER_FAILURE_POLICY";
pub const ENV_TIMEOUT: &str = "GEOCODER_TIMEOUT";
pub const ENV_MAX_REDIRECTS: &str = "GEOCODER_MAX_REDIRECTS";
pub const ENV_LOG_LEVEL: &str = "GEOCODER_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "GEOCODER_LOG_FORMAT";

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| GeocoderError::config(format!("Invalid {}: {}", name, e)))
}

/// Geocoder settings named by the environment; unset variables stay `None`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocoderEnv {
    pub endpoint: Option<String>,
    pub batch_limit: Option<usize>,
    pub batch_sizing: Option<BatchSizing>,
    pub failure_policy: Option<FailurePolicy>,
    pub timeout: Option<u64>,
    pub max_redirects: Option<usize>,
}

impl GeocoderEnv {
    /// Read the variables through an arbitrary lookup
    pub fn read_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            endpoint: lookup(ENV_ENDPOINT),
            batch_limit: lookup(ENV_BATCH_LIMIT)
                .map(|v| parse_var(ENV_BATCH_LIMIT, &v))
                .transpose()?,
            batch_sizing: lookup(ENV_BATCH_SIZING)
                .map(|v| parse_var(ENV_BATCH_SIZING, &v))
                .transpose()?,
            failure_policy: lookup(ENV_FAILURE_POLICY)
                .map(|v| parse_var(ENV_FAILURE_POLICY, &v))
                .transpose()?,
            timeout: lookup(ENV_TIMEOUT)
                .map(|v| parse_var(ENV_TIMEOUT, &v))
                .transpose()?,
            max_redirects: lookup(ENV_MAX_REDIRECTS)
                .map(|v| parse_var(ENV_MAX_REDIRECTS, &v))
                .transpose()?,
        })
    }

    /// Overwrite every field of `config` that a variable names
    pub fn apply(self, config: &mut GeocoderConfig) {
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(limit) = self.batch_limit {
            config.batch_limit = limit;
        }
        if let Some(sizing) = self.batch_sizing {
            config.batch_sizing = sizing;
        }
        if let Some(policy) = self.failure_policy {
            config.failure_policy = policy;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(redirects) = self.max_redirects {
            config.max_redirects = redirects;
        }
    }
}

/// Logging settings named by the environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingEnv {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl LoggingEnv {
    pub fn read_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            level: lookup(ENV_LOG_LEVEL),
            format: lookup(ENV_LOG_FORMAT)
                .map(|v| parse_var(ENV_LOG_FORMAT, &v))
                .transpose()?,
        })
    }

    pub fn apply(self, config: &mut LoggingConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
    }
}

/// Everything the environment overrides, applied on top of a loaded config
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub geocoder: GeocoderEnv,
    pub logging: LoggingEnv,
}

impl EnvOverrides {
    /// Read the process environment
    pub fn from_env() -> Result<Self> {
        Self::read_with(|key| env::var(key).ok())
    }

    pub fn read_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            geocoder: GeocoderEnv::read_with(&lookup)?,
            logging: LoggingEnv::read_with(&lookup)?,
        })
    }

    pub fn apply(self, config: &mut Config) {
        self.geocoder.apply(&mut config.geocoder);
        self.logging.apply(&mut config.logging);
    }
}

impl GeocoderConfig {
    /// Defaults overridden by the environment
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Defaults overridden through an arbitrary variable lookup
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        GeocoderEnv::read_with(lookup)?.apply(&mut config);
        Ok(config)
    }
}

impl LoggingConfig {
    /// Defaults overridden by the environment
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        LoggingEnv::read_with(lookup)?.apply(&mut config);
        Ok(config)
    }
}
