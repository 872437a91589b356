use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::orchestrator::BatchOrchestrator;
use super::response::build_response;
use crate::domain::{BatchSpec, Envelope};

/// Turns an inbound request into a response envelope.
///
/// Implementations must not fail: every fault ends up as a 500 envelope.
/// Routing different requests to different batches belongs to whoever sits in
/// front of this trait.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: &serde_json::Value) -> Envelope;
}

/// Runs the same fixed batch for every request.
///
/// The batch is validated once by `AppBuilder::build` and shared read-only
/// between requests. Concurrent `handle` calls run independent batches.
pub struct BatchHandler {
    orchestrator: BatchOrchestrator,
    batch: Arc<BatchSpec>,
}

impl BatchHandler {
    pub fn new(orchestrator: BatchOrchestrator, batch: BatchSpec) -> Self {
        Self {
            orchestrator,
            batch: Arc::new(batch),
        }
    }

    /// The batch every request runs.
    pub fn batch(&self) -> &BatchSpec {
        &self.batch
    }
}

#[async_trait]
impl RequestHandler for BatchHandler {
    async fn handle(&self, request: &serde_json::Value) -> Envelope {
        debug!(request = %request, "received request");

        let result = self.orchestrator.run_batch(&self.batch.tasks).await;
        let envelope = build_response(result);

        info!(status = envelope.status_code, "request handled");
        envelope
    }
}
