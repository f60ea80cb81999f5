//! Core functionality for the geocoder
//!
//! This module contains the batching and reconciliation pipeline: grid
//! flattening, batch partitioning, remote lookup and result assembly.

pub mod assembler;
pub mod batch;
pub mod grid;
pub mod lookup;
pub mod pipeline;

// Re-export commonly used types
pub use assembler::{HEADER, ResultRow, ResultTable, TableCell, assemble};
pub use batch::{Batch, BatchSizing, Batcher};
pub use grid::{CellValue, CodeSequence, GridSource, RawGrid, flatten, flatten_filter};
pub use lookup::{LookupClient, LookupError, NOT_FOUND_MARKER, Outcome, PostcodesIoClient};
pub use pipeline::{FailurePolicy, Notifier, Pipeline, PipelineReport, PipelineState};
