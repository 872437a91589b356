//! AppBuilder - wiring for a `BatchHandler`.
//!
//! Every collaborator has a default, so `AppBuilder::new().build()` gives a
//! working handler over the sample batch. `build()` validates the batch up
//! front so a bad definition fails at startup instead of on the first request.

use std::sync::Arc;

use super::handler::BatchHandler;
use super::orchestrator::BatchOrchestrator;
use super::pipeline::ItemPipeline;
use crate::domain::{BatchSpec, SpecError};
use crate::impls::{SimulatedStages, TracingProgressSink};
use crate::ports::{Clock, IdGenerator, ProgressSink, Stages, SystemClock, UlidGenerator};

/// # Example
/// ```ignore
/// let handler = AppBuilder::new()
///     .batch(BatchSpec::from_json_str(&json)?)
///     .progress_sink(Arc::new(NoopProgressSink))
///     .build()?;
/// let envelope = handler.handle(&request).await;
/// ```
///
/// # Defaults
/// - batch: `BatchSpec::sample()`
/// - stages: `SimulatedStages`
/// - progress: `TracingProgressSink`
/// - clock: `SystemClock`
/// - ids: `UlidGenerator` over the configured clock
pub struct AppBuilder {
    batch: BatchSpec,
    stages: Arc<dyn Stages>,
    progress: Arc<dyn ProgressSink>,
    clock: Arc<dyn Clock>,
    ids: Option<Arc<dyn IdGenerator>>,
}

/// Why `AppBuilder::build` refused to produce a handler.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    InvalidBatch(#[from] SpecError),
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            batch: BatchSpec::sample(),
            stages: Arc::new(SimulatedStages::new()),
            progress: Arc::new(TracingProgressSink),
            clock: Arc::new(SystemClock),
            ids: None,
        }
    }

    /// Batch run on every request. Validated in `build`.
    pub fn batch(mut self, batch: BatchSpec) -> Self {
        self.batch = batch;
        self
    }

    /// Replace the simulated stages, e.g. with a double in tests.
    pub fn stages(mut self, stages: Arc<dyn Stages>) -> Self {
        self.stages = stages;
        self
    }

    /// Where stage lifecycle events go.
    pub fn progress_sink(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Clock for progress timestamps. Also seeds the default id generator.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Override batch id allocation. Without this, ids come from a
    /// `UlidGenerator` over the configured clock.
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Validate the batch and assemble the handler.
    ///
    /// # Errors
    /// `BuildError::InvalidBatch` when a task name is empty or repeated.
    pub fn build(self) -> Result<BatchHandler, BuildError> {
        self.batch.validate()?;

        let ids: Arc<dyn IdGenerator> = match self.ids {
            Some(ids) => ids,
            None => Arc::new(UlidGenerator::new(Arc::clone(&self.clock))),
        };
        let pipeline = ItemPipeline::new(self.stages, self.progress, self.clock);
        let orchestrator = BatchOrchestrator::new(Arc::new(pipeline), ids);

        Ok(BatchHandler::new(orchestrator, self.batch))
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
