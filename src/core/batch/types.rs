//! Batch types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nominal batch limit configured by default
pub const DEFAULT_BATCH_LIMIT: usize = 100;

/// Largest number of postcodes the bulk endpoint accepts per request
pub const REMOTE_BATCH_CEILING: usize = 100;

/// How the nominal batch limit maps onto the real batch size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchSizing {
    /// One slot of the limit is held back: a limit of 100 yields batches of 99
    #[default]
    ReserveOne,
    /// Batches hold exactly `limit` codes
    Exact,
}

impl BatchSizing {
    /// Effective maximum batch length for a nominal limit
    pub fn effective_size(self, limit: usize) -> usize {
        match self {
            BatchSizing::ReserveOne => limit.saturating_sub(1),
            BatchSizing::Exact => limit,
        }
    }
}

impl fmt::Display for BatchSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchSizing::ReserveOne => write!(f, "reserve_one"),
            BatchSizing::Exact => write!(f, "exact"),
        }
    }
}

impl FromStr for BatchSizing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reserve_one" | "reserve-one" => Ok(BatchSizing::ReserveOne),
            "exact" => Ok(BatchSizing::Exact),
            other => Err(format!("Unknown batch sizing: {}", other)),
        }
    }
}

/// A contiguous, order-preserving slice of the postcode sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Position of this batch in the batch sequence
    pub index: usize,
    /// Postcodes in input order
    pub codes: Vec<String>,
}

impl Batch {
    pub fn new(index: usize, codes: Vec<String>) -> Self {
        Self { index, codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
