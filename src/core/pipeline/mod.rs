//! End-to-end geocoding pipeline
//!
//! Drives flatten → filter → batch → lookup (one batch at a time) → assemble,
//! reporting user-facing conditions through a [`Notifier`].

mod notifier;
mod orchestrator;
mod types;


pub use notifier::{Notifier, RecordingNotifier, StderrNotifier};
pub use orchestrator::Pipeline;
pub use types::{BatchFailure, FailurePolicy, PipelineReport, PipelineState};
