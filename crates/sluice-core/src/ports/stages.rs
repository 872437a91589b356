//! Stages port - the two steps every task goes through.
//!
//! Implementations only model the work itself. Progress reporting and error
//! containment live in the item pipeline.

use async_trait::async_trait;

use crate::domain::{StageError, TaskSpec};

/// The work done for one task.
///
/// Stages report failure through `StageError`. A panic is caught by the
/// pipeline and settled as `StageError::Panicked`, but implementations should
/// not rely on that.
///
/// # Thread Safety
/// One instance serves every concurrently running task, so implementations
/// must be `Send + Sync` and keep per-task state out of `self`.
#[async_trait]
pub trait Stages: Send + Sync {
    /// Acquire the task's input. Fails with `StageError::Acquisition`.
    async fn acquire(&self, task: &TaskSpec) -> Result<(), StageError>;

    /// Transform the acquired input. Fails with `StageError::Transform`.
    async fn transform(&self, task: &TaskSpec) -> Result<(), StageError>;
}
