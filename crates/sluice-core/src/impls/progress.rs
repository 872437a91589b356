//! ProgressSink implementations.
//!
//! - **TracingProgressSink**: writes each event as a structured log line.
//! - **NoopProgressSink**: drops everything.
//! - **ChannelProgressSink**: forwards events to an unbounded tokio channel,
//!   for callers that want to watch progress programmatically.

use tokio::sync::mpsc;
use tracing::info;

use crate::domain::{Phase, ProgressEvent};
use crate::ports::ProgressSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgressSink;

impl ProgressSink for TracingProgressSink {
    fn emit(&self, event: &ProgressEvent) {
        let phase = match event.phase {
            Phase::Started => "started",
            Phase::Completed => "completed",
            Phase::Failed => "failed",
        };
        info!(
            batch_id = %event.batch_id,
            task = %event.task,
            stage = %event.stage,
            "{} {}",
            event.stage,
            phase
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn emit(&self, _event: &ProgressEvent) {}
}

#[derive(Debug, Clone)]
pub struct ChannelProgressSink {
    tx: mpsc::UnboundedSender<ProgressEvent>,
}

impl ChannelProgressSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: &ProgressEvent) {
        // receiver may be gone; progress is best effort
        let _ = self.tx.send(event.clone());
    }
}
