//! Helper functions for creating specific error types

use super::types::GeocoderError;
use crate::core::lookup::LookupError;

/// Shown when the selection cannot be read
pub const INPUT_UNAVAILABLE_MESSAGE: &str =
    "Error: could not get data from the sheet. Please try again.";
/// Shown when the selection holds no postcodes
pub const EMPTY_SELECTION_MESSAGE: &str =
    "Please select at least one cell containing a postcode.";
/// Shown when a batch lookup fails
pub const REMOTE_CALL_FAILED_MESSAGE: &str =
    "Error: could not get postcode data from postcodes.io API. Please try again.";
/// Shown when the result table cannot be written
pub const PRESENTATION_FAILED_MESSAGE: &str = "Error: could not print results. Please try again.";

impl GeocoderError {
    pub fn input_unavailable<S: Into<String>>(message: S) -> Self {
        Self::InputUnavailable(message.into())
    }

    pub fn presentation<S: Into<String>>(message: S) -> Self {
        Self::PresentationFailed(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Wrap a lookup failure with the index of the batch it belongs to
    pub fn remote_call_failed(batch_index: usize, error: &LookupError) -> Self {
        Self::RemoteCallFailed {
            batch_index,
            message: error.to_string(),
        }
    }

    /// Fixed message shown to the person who started the run
    pub fn user_message(&self) -> String {
        match self {
            Self::InputUnavailable(_) | Self::Csv(_) => INPUT_UNAVAILABLE_MESSAGE.to_string(),
            Self::EmptySelection => EMPTY_SELECTION_MESSAGE.to_string(),
            Self::RemoteCallFailed { .. } | Self::HttpClient(_) | Self::Serialization(_) => {
                REMOTE_CALL_FAILED_MESSAGE.to_string()
            }
            Self::PresentationFailed(_) => PRESENTATION_FAILED_MESSAGE.to_string(),
            Self::Config(_) | Self::Yaml(_) | Self::Io(_) => format!("Error: {}", self),
        }
    }

    /// Process exit code reported by the command line front end
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Yaml(_) => 78,
            Self::InputUnavailable(_) | Self::Csv(_) | Self::EmptySelection => 65,
            Self::RemoteCallFailed { .. } | Self::HttpClient(_) | Self::Serialization(_) => 69,
            Self::PresentationFailed(_) | Self::Io(_) => 74,
        }
    }
}
