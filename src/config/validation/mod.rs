//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `geocoder_validators`: Geocoder and logging validators
//! - `tests`: Test suite for all validators

mod geocoder_validators;
mod trait_def;

pub use trait_def::Validate;
