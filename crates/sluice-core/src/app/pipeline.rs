//! ItemPipeline - runs one task through acquire then transform.
//!
//! This is where per-task failures stop. `run` always returns a settled
//! `Outcome`; a stage error or a stage panic becomes `Outcome::Failed` and
//! never reaches the orchestrator.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, warn};

use crate::domain::{BatchId, Outcome, Phase, ProgressEvent, Stage, StageError, TaskSpec};
use crate::ports::{Clock, ProgressSink, Stages};

/// Drives a single task through its stages and reports progress.
///
/// Shared by every spawned task of a batch, so it holds only `Arc`ed,
/// `Send + Sync` collaborators and no per-task state.
///
/// # Progress
/// Each stage that starts emits `Started`, then exactly one of `Completed`
/// or `Failed`. Transform emits nothing when acquire failed.
pub struct ItemPipeline {
    stages: Arc<dyn Stages>,
    progress: Arc<dyn ProgressSink>,
    clock: Arc<dyn Clock>,
}

impl ItemPipeline {
    /// `clock` stamps every progress event.
    pub fn new(
        stages: Arc<dyn Stages>,
        progress: Arc<dyn ProgressSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            stages,
            progress,
            clock,
        }
    }

    /// Run acquire then transform and settle the task.
    pub async fn run(&self, batch_id: BatchId, task: &TaskSpec) -> Outcome {
        match self.run_stages(batch_id, task).await {
            Ok(()) => {
                debug!(task = %task, "task succeeded");
                Outcome::success(&task.name)
            }
            Err(err) => {
                warn!(task = %task, error = %err, "task failed");
                Outcome::failed(&task.name, err.to_string())
            }
        }
    }

    async fn run_stages(&self, batch_id: BatchId, task: &TaskSpec) -> Result<(), StageError> {
        // transform only runs once acquire has succeeded
        self.observe(batch_id, task, Stage::Acquire, self.stages.acquire(task))
            .await?;
        self.observe(batch_id, task, Stage::Transform, self.stages.transform(task))
            .await
    }

    async fn observe<F>(
        &self,
        batch_id: BatchId,
        task: &TaskSpec,
        stage: Stage,
        work: F,
    ) -> Result<(), StageError>
    where
        F: Future<Output = Result<(), StageError>>,
    {
        self.notify(batch_id, task, stage, Phase::Started);
        let result = match AssertUnwindSafe(work).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(StageError::Panicked(panic_message(payload.as_ref()))),
        };
        let phase = match result {
            Ok(()) => Phase::Completed,
            Err(_) => Phase::Failed,
        };
        self.notify(batch_id, task, stage, phase);
        result
    }

    fn notify(&self, batch_id: BatchId, task: &TaskSpec, stage: Stage, phase: Phase) {
        self.progress.emit(&ProgressEvent {
            batch_id,
            task: task.name.clone(),
            stage,
            phase,
            at: self.clock.now(),
        });
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
