//! Pipeline orchestrator
//!
//! Batches are looked up strictly one after another. Each lookup is awaited
//! before the next request is sent, so the remote service never sees
//! overlapping requests from one run.

use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use super::notifier::Notifier;
use super::types::{BatchFailure, FailurePolicy, PipelineReport, PipelineState};
use crate::config::GeocoderConfig;
use crate::core::assembler::assemble;
use crate::core::batch::Batcher;
use crate::core::grid::{CodeSequence, GridSource, RawGrid, flatten};
use crate::core::lookup::{LookupClient, Outcome, PostcodesIoClient};
use crate::utils::error::{GeocoderError, Result};

/// Flatten → filter → batch → lookup → assemble
pub struct Pipeline {
    client: Arc<dyn LookupClient>,
    notifier: Arc<dyn Notifier>,
    batcher: Batcher,
    failure_policy: FailurePolicy,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(
        client: Arc<dyn LookupClient>,
        notifier: Arc<dyn Notifier>,
        batcher: Batcher,
    ) -> Self {
        Self {
            client,
            notifier,
            batcher,
            failure_policy: FailurePolicy::default(),
            state: PipelineState::Idle,
        }
    }

    /// Build a pipeline that talks to the configured postcodes.io endpoint
    pub fn from_config(config: &GeocoderConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let client = PostcodesIoClient::new(config)
            .map_err(|e| GeocoderError::config(e.to_string()))?;
        let batcher = Batcher::new(config.batch_limit, config.batch_sizing)?;

        Ok(Self::new(Arc::new(client), notifier, batcher)
            .with_failure_policy(config.failure_policy))
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn batcher(&self) -> &Batcher {
        &self.batcher
    }

    /// State reached by the most recent run
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Run over an in-memory grid
    pub async fn run_grid(&mut self, grid: &RawGrid) -> Result<PipelineReport> {
        let mut source = grid.clone();
        self.run(&mut source).await
    }

    /// Read the selection from `source` and geocode it
    pub async fn run(&mut self, source: &mut dyn GridSource) -> Result<PipelineReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("geocode_run", %run_id);
        self.execute(source).instrument(span).await
    }

    async fn execute(&mut self, source: &mut dyn GridSource) -> Result<PipelineReport> {
        self.state = PipelineState::Idle;

        self.transition(PipelineState::Flattening);
        let grid = match source.read_grid() {
            Ok(grid) => grid,
            Err(e) => return Err(self.fail(into_input_error(e))),
        };
        let flat = flatten(&grid);

        self.transition(PipelineState::Filtering);
        let codes = CodeSequence::from_codes(flat);
        if codes.is_empty() {
            return Err(self.fail(GeocoderError::EmptySelection));
        }

        self.transition(PipelineState::Batching);
        let batches = self.batcher.split(&codes);
        info!(
            codes = codes.len(),
            batches = batches.len(),
            batch_size = self.batcher.batch_size(),
            "Starting lookup"
        );

        let mut outcomes: Vec<Vec<Outcome>> = Vec::with_capacity(batches.len());
        let mut failed_batches = Vec::new();

        for batch in &batches {
            self.transition(PipelineState::LookingUp {
                batch_index: batch.index,
            });

            match self.client.lookup(batch).await {
                Ok(batch_outcomes) => {
                    debug!(
                        batch_index = batch.index,
                        outcomes = batch_outcomes.len(),
                        resolved = batch_outcomes.iter().filter(|o| o.is_resolved()).count(),
                        "Batch looked up"
                    );
                    outcomes.push(batch_outcomes);
                }
                Err(e) => {
                    let err = GeocoderError::remote_call_failed(batch.index, &e);
                    match self.failure_policy {
                        FailurePolicy::Abort => return Err(self.fail(err)),
                        FailurePolicy::SkipBatch => {
                            warn!(
                                batch_index = batch.index,
                                batch_size = batch.len(),
                                error = %e,
                                "Skipping failed batch"
                            );
                            self.notifier.notify(&err.user_message());
                            failed_batches.push(BatchFailure {
                                index: batch.index,
                                size: batch.len(),
                                error: e.to_string(),
                            });
                        }
                    }
                }
            }
        }

        self.transition(PipelineState::Assembling);
        let table = assemble(&outcomes);

        self.transition(PipelineState::Done);
        info!(
            rows = table.data_rows().len(),
            failed_batches = failed_batches.len(),
            "Geocoding finished"
        );

        Ok(PipelineReport {
            table,
            failed_batches,
            batches: batches.len(),
            codes: codes.len(),
        })
    }

    fn transition(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal pipeline transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "Pipeline transition");
        self.state = next;
    }

    fn fail(&mut self, err: GeocoderError) -> GeocoderError {
        error!(error = %err, state = %self.state, "Geocoding run failed");
        self.notifier.notify(&err.user_message());
        self.transition(PipelineState::Failed);
        err
    }
}

fn into_input_error(err: GeocoderError) -> GeocoderError {
    match err {
        GeocoderError::InputUnavailable(_) => err,
        other => GeocoderError::input_unavailable(other.to_string()),
    }
}
