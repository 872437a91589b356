//! SimulatedStages - stand-in for real fetch/extract work.
//!
//! Each stage sleeps for the task's configured delay. Acquire then fails if the
//! task asks for it; transform always succeeds.

use async_trait::async_trait;
use tokio::time::sleep;

use crate::domain::{StageError, TaskSpec};
use crate::ports::Stages;

pub const SIMULATED_ACQUIRE_FAILURE: &str = "Network Failed (404 Not Found)";

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedStages;

impl SimulatedStages {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Stages for SimulatedStages {
    async fn acquire(&self, task: &TaskSpec) -> Result<(), StageError> {
        sleep(task.acquire_delay()).await;
        if task.force_failure {
            return Err(StageError::Acquisition(SIMULATED_ACQUIRE_FAILURE.to_string()));
        }
        Ok(())
    }

    async fn transform(&self, task: &TaskSpec) -> Result<(), StageError> {
        sleep(task.transform_delay()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn acquire_waits_for_delay() {
        let stages = SimulatedStages::new();
        let task = TaskSpec::new("a.gz", 1200, 800);

        let start = Instant::now();
        stages.acquire(&task).await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(1200));
    }

    #[tokio::test(start_paused = true)]
    async fn forced_failure_settles_after_delay() {
        let stages = SimulatedStages::new();
        let task = TaskSpec::new("d.gz", 1500, 0).failing();

        let start = Instant::now();
        let err = stages.acquire(&task).await.unwrap_err();
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
        assert_eq!(err, StageError::Acquisition(SIMULATED_ACQUIRE_FAILURE.to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn transform_always_succeeds() {
        let stages = SimulatedStages::new();
        let task = TaskSpec::new("d.gz", 1500, 300).failing();

        let start = Instant::now();
        stages.transform(&task).await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(300));
    }
}
