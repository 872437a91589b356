//! Errors - error types, split by where they stop propagating.
//!
//! - `StageError`: raised by a stage for one task, or a stage panic caught by
//!   the item pipeline. Always turned into a `Failed` outcome.
//! - `OrchestrationError`: not attributable to a single task. The only error
//!   that leaves the orchestrator; rendered as a 500 envelope.
//! - `SpecError`: loading or validating a batch definition.

use thiserror::Error;

/// Failure of one task's stage.
///
/// Displays as the bare message so it can go straight into the `error` field
/// of a failed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// The input could not be fetched.
    #[error("{0}")]
    Acquisition(String),

    /// The input was fetched but could not be processed.
    #[error("{0}")]
    Transform(String),

    /// The stage panicked; carries the panic message.
    #[error("stage panicked: {0}")]
    Panicked(String),
}

/// Fault in the batch machinery itself.
///
/// Any of these discards the batch result and becomes a 500 envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrchestrationError {
    /// A spawned task ended without yielding an outcome, e.g. a progress sink
    /// panicked outside the stage guard.
    #[error("task aborted before settling: {0}")]
    TaskAborted(String),

    #[error("no outcome recorded for task at index {index}")]
    MissingOutcome { index: usize },

    #[error("more than one outcome recorded for task at index {index}")]
    DuplicateOutcome { index: usize },

    #[error("outcome reported for unknown task index {index}")]
    UnexpectedIndex { index: usize },
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("invalid batch definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task at index {index} has an empty name")]
    EmptyTaskName { index: usize },

    #[error("duplicate task name '{0}'")]
    DuplicateTaskName(String),
}
