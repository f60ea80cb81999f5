//! Error handling for the geocoder
//!
//! This module defines all error types used throughout the pipeline.

mod helpers;
mod types;

pub use types::{GeocoderError, Result};
pub use helpers::{
    EMPTY_SELECTION_MESSAGE, INPUT_UNAVAILABLE_MESSAGE, PRESENTATION_FAILED_MESSAGE,
    REMOTE_CALL_FAILED_MESSAGE,
};
