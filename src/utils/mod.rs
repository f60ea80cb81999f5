//! Utility modules for the geocoder
//!
//! - **error**: Error types and user-facing messages
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{GeocoderError, Result};
pub use logging::init_logging;
