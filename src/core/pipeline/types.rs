//! Pipeline policy, state and report types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::assembler::ResultTable;

/// What to do when one batch lookup fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Report the failure, drop that batch's rows and keep going
    #[default]
    SkipBatch,
    /// Discard the whole run at the first failing batch
    Abort,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::SkipBatch => write!(f, "skip_batch"),
            FailurePolicy::Abort => write!(f, "abort"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip_batch" | "skip-batch" | "skip" | "continue" => Ok(FailurePolicy::SkipBatch),
            "abort" => Ok(FailurePolicy::Abort),
            other => Err(format!("Unknown failure policy: {}", other)),
        }
    }
}

/// Orchestrator states
///
/// `Idle → Flattening → Filtering → Batching → LookingUp* → Assembling → Done`,
/// with `Failed` reachable from `Flattening`, `Filtering` and `LookingUp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Flattening,
    Filtering,
    Batching,
    LookingUp { batch_index: usize },
    Assembling,
    Done,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }

    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_transition_to(self, next: PipelineState) -> bool {
        use PipelineState::*;

        match (self, next) {
            (Idle, Flattening) => true,
            (Flattening, Filtering) | (Flattening, Failed) => true,
            (Filtering, Batching) | (Filtering, Failed) => true,
            (Batching, LookingUp { batch_index: 0 }) | (Batching, Assembling) => true,
            (LookingUp { batch_index: a }, LookingUp { batch_index: b }) => b == a + 1,
            (LookingUp { .. }, Assembling) | (LookingUp { .. }, Failed) => true,
            (Assembling, Done) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Flattening => write!(f, "flattening"),
            PipelineState::Filtering => write!(f, "filtering"),
            PipelineState::Batching => write!(f, "batching"),
            PipelineState::LookingUp { batch_index } => write!(f, "looking_up[{}]", batch_index),
            PipelineState::Assembling => write!(f, "assembling"),
            PipelineState::Done => write!(f, "done"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

/// A batch whose lookup failed and whose rows are missing from the table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchFailure {
    pub index: usize,
    pub size: usize,
    pub error: String,
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Header plus one row per successfully looked-up postcode
    pub table: ResultTable,
    /// Batches skipped under [`FailurePolicy::SkipBatch`]
    pub failed_batches: Vec<BatchFailure>,
    /// Number of batches dispatched
    pub batches: usize,
    /// Number of postcodes after dropping empty cells
    pub codes: usize,
}

impl PipelineReport {
    /// True when every batch produced rows
    pub fn is_complete(&self) -> bool {
        self.failed_batches.is_empty()
    }

    /// Postcodes whose rows are missing from the table
    pub fn missing_codes(&self) -> usize {
        self.failed_batches.iter().map(|f| f.size).sum()
    }
}
