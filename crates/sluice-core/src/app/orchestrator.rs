//! BatchOrchestrator - fan-out / fan-in over a batch of tasks.
//!
//! Every task is spawned onto a `JoinSet` at once (no admission limit). Each
//! spawned future returns its input index with its outcome; the drain loop
//! writes outcomes into a slot vector pre-sized to the batch, so the result is
//! in input order whatever order tasks finish in.
//!
//! Stage errors and stage panics are settled per task by the pipeline, so a
//! join error here only comes from code outside the stage guard.

use std::sync::Arc;

use tokio::task::{JoinError, JoinSet};
use tokio::time::Instant;
use tracing::{Instrument, error, info, info_span};

use super::pipeline::{ItemPipeline, panic_message};
use crate::domain::{BatchResult, OrchestrationError, Outcome, TaskSpec};
use crate::ports::IdGenerator;

/// Runs a batch of tasks concurrently and gathers their outcomes.
///
/// Holds no per-run state: each `run_batch` call allocates a fresh batch id and
/// its own `JoinSet`, so one orchestrator can serve overlapping requests.
///
/// # Concurrency
/// Every task is spawned at once onto the multi-threaded runtime. Wall time is
/// the slowest task's, not the sum.
pub struct BatchOrchestrator {
    pipeline: Arc<ItemPipeline>,
    ids: Arc<dyn IdGenerator>,
}

impl BatchOrchestrator {
    /// `ids` is consulted once per `run_batch` call.
    pub fn new(pipeline: Arc<ItemPipeline>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { pipeline, ids }
    }

    /// Run every task concurrently and wait for all of them to settle.
    ///
    /// Task failures are already folded into `Outcome::Failed` by the
    /// pipeline, so an `Err` here means the batch machinery itself broke.
    pub async fn run_batch(&self, tasks: &[TaskSpec]) -> Result<BatchResult, OrchestrationError> {
        let batch_id = self.ids.generate_batch_id();
        let span = info_span!("batch", batch_id = %batch_id);
        let started = Instant::now();

        info!(parent: &span, tasks = tasks.len(), "batch started");

        let mut join_set: JoinSet<(usize, Outcome)> = JoinSet::new();
        for (index, task) in tasks.iter().enumerate() {
            let pipeline = Arc::clone(&self.pipeline);
            let task = task.clone();
            join_set.spawn(
                async move {
                    let outcome = pipeline.run(batch_id, &task).await;
                    (index, outcome)
                }
                .instrument(span.clone()),
            );
        }

        let result = collect_outcomes(join_set, tasks.len()).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(batch) => info!(
                parent: &span,
                succeeded = batch.succeeded(),
                failed = batch.failed(),
                elapsed_ms,
                "batch settled"
            ),
            Err(e) => error!(parent: &span, error = %e, elapsed_ms, "batch aborted"),
        }
        result
    }
}

/// Drain the join set into input-ordered slots.
///
/// Keeps draining after a fault so no spawned task is left running; the first
/// fault is the one reported.
async fn collect_outcomes(
    mut join_set: JoinSet<(usize, Outcome)>,
    expected: usize,
) -> Result<BatchResult, OrchestrationError> {
    let mut slots: Vec<Option<Outcome>> = vec![None; expected];
    let mut first_fault: Option<OrchestrationError> = None;

    while let Some(joined) = join_set.join_next().await {
        let fault = match joined {
            Ok((index, outcome)) => match slots.get_mut(index) {
                None => Some(OrchestrationError::UnexpectedIndex { index }),
                Some(slot) if slot.is_some() => {
                    Some(OrchestrationError::DuplicateOutcome { index })
                }
                Some(slot) => {
                    *slot = Some(outcome);
                    None
                }
            },
            Err(join_err) => Some(OrchestrationError::TaskAborted(abort_reason(join_err))),
        };
        if let Some(fault) = fault {
            error!(error = %fault, "task did not settle cleanly");
            first_fault.get_or_insert(fault);
        }
    }

    if let Some(fault) = first_fault {
        return Err(fault);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(OrchestrationError::MissingOutcome { index }))
        .collect::<Result<Vec<_>, _>>()
        .map(BatchResult::new)
}

fn abort_reason(err: JoinError) -> String {
    if err.is_panic() {
        format!("panicked: {}", panic_message(err.into_panic().as_ref()))
    } else {
        "cancelled".to_string()
    }
}
