//! # Postcode Geocoder
//!
//! Batch geocoding of UK postcodes through the postcodes.io bulk lookup API.
//!
//! ## Features
//!
//! - **Selection flattening**: any rectangular selection is read row by row
//! - **Order preserving**: output rows follow the input order exactly
//! - **Bounded batches**: never more than 100 postcodes per request
//! - **Sequential lookups**: one request in flight at a time
//! - **Clear failures**: unmatched postcodes are marked, failed batches reported
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use postcode_geocoder::{geocode_grid, grid_from_rows};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let grid = grid_from_rows([vec!["SW1A 1AA", ""], vec!["EC1A 1BB", "notapostcode"]]);
//!     let report = geocode_grid(&grid).await?;
//!
//!     for row in report.table.rows() {
//!         println!("{} {} {}", row[0], row[1], row[2]);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod sheet;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GeocoderError, Result};

pub use core::assembler::{HEADER, ResultTable, TableCell};
pub use core::batch::{Batch, BatchSizing, Batcher};
pub use core::grid::{CellValue, CodeSequence, GridSource, RawGrid, grid_from_rows};
pub use core::lookup::{LookupClient, NOT_FOUND_MARKER, Outcome, PostcodesIoClient};
pub use core::pipeline::{FailurePolicy, Pipeline, PipelineReport, StderrNotifier};

use std::sync::Arc;

/// Geocode an in-memory selection against the default postcodes.io endpoint
pub async fn geocode_grid(grid: &RawGrid) -> Result<PipelineReport> {
    let mut pipeline = Pipeline::from_config(
        &config::GeocoderConfig::default(),
        Arc::new(StderrNotifier),
    )?;
    pipeline.run_grid(grid).await
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
/// Short commit hash recorded by the build script
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Geocoder build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: GIT_HASH,
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
