//! Error handling utilities
//!
//! This module provides the crate-wide error type and the user-facing messages
//! attached to each failure kind.

pub mod error;

// Re-export commonly used types
pub use error::*;
