//! ProgressSink port - where progress events go.
//!
//! `emit` returns nothing: a sink that cannot deliver drops the event, and the
//! task carries on.

use crate::domain::ProgressEvent;

/// Receives stage lifecycle events from the item pipeline.
///
/// `emit` runs inline on the task's executor thread, so it should not block.
/// It runs outside the stage panic guard: a sink that panics aborts the batch.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: &ProgressEvent);
}
