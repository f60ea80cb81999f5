//! Splitting a code sequence into bounded batches

use super::types::{Batch, BatchSizing, REMOTE_BATCH_CEILING};
use crate::core::grid::CodeSequence;
use crate::utils::error::{GeocoderError, Result};
use tracing::debug;

/// Partitions code sequences into batches of at most [`Batcher::batch_size`] codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batcher {
    limit: usize,
    sizing: BatchSizing,
}

impl Batcher {
    /// Create a batcher for a nominal limit, which must be greater than 1
    pub fn new(limit: usize, sizing: BatchSizing) -> Result<Self> {
        if limit <= 1 {
            return Err(GeocoderError::config(format!(
                "Batch limit must be greater than 1, got {}",
                limit
            )));
        }

        let size = sizing.effective_size(limit);
        if size > REMOTE_BATCH_CEILING {
            return Err(GeocoderError::config(format!(
                "Batch size {} exceeds the remote ceiling of {} postcodes",
                size, REMOTE_BATCH_CEILING
            )));
        }

        Ok(Self { limit, sizing })
    }

    /// Nominal limit this batcher was configured with
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn sizing(&self) -> BatchSizing {
        self.sizing
    }

    /// Maximum number of codes in any produced batch
    pub fn batch_size(&self) -> usize {
        self.sizing.effective_size(self.limit)
    }

    /// Walk the sequence in order, closing each batch once it is full.
    ///
    /// Never yields an empty batch: empty input gives no batches and a length
    /// that divides evenly gives no trailing empty batch.
    pub fn split(&self, codes: &CodeSequence) -> Vec<Batch> {
        let batches: Vec<Batch> = codes
            .as_slice()
            .chunks(self.batch_size())
            .enumerate()
            .map(|(index, chunk)| Batch::new(index, chunk.to_vec()))
            .collect();

        debug!(
            codes = codes.len(),
            batches = batches.len(),
            batch_size = self.batch_size(),
            "Split postcodes into batches"
        );

        batches
    }
}

/// Convenience wrapper around [`Batcher::split`]
pub fn split_into_batches(
    codes: &CodeSequence,
    limit: usize,
    sizing: BatchSizing,
) -> Result<Vec<Batch>> {
    Ok(Batcher::new(limit, sizing)?.split(codes))
}
