//! Lookup error type
//!
//! Every failure of a single batch request collapses into one of these
//! variants. None of them are retried.

/// Error raised while looking up one batch
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Failed to parse lookup response{}: {message}", status_suffix(.status))]
    ResponseParsing {
        status: Option<u16>,
        message: String,
    },

    #[error("Lookup client configuration error: {message}")]
    Configuration { message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" (HTTP {})", code))
        .unwrap_or_default()
}

impl LookupError {
    /// Create network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn response_parsing(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            status,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network(format!("request timed out: {}", err))
        } else {
            Self::network(err.to_string())
        }
    }
}
