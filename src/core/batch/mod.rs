//! Batch partitioning for the bulk lookup endpoint
//!
//! This module splits an ordered postcode sequence into contiguous groups no
//! larger than the remote service accepts in a single request.

mod batcher;
mod types;


// Re-export all public types
pub use batcher::{Batcher, split_into_batches};
pub use types::{Batch, BatchSizing, DEFAULT_BATCH_LIMIT, REMOTE_BATCH_CEILING};
