//! Error types for the geocoder

use thiserror::Error;

/// Result type alias for the geocoder
pub type Result<T> = std::result::Result<T, GeocoderError>;

/// Main error type for the geocoder
#[derive(Error, Debug)]
pub enum GeocoderError {
    /// The selection or grid could not be read
    #[error("Input unavailable: {0}")]
    InputUnavailable(String),

    /// No postcodes left after dropping empty cells
    #[error("Empty selection: no postcodes to look up")]
    EmptySelection,

    /// Transport failure or malformed response for one batch
    #[error("Remote call failed for batch {batch_index}: {message}")]
    RemoteCallFailed { batch_index: usize, message: String },

    /// Writing the result table failed
    #[error("Presentation failed: {0}")]
    PresentationFailed(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
