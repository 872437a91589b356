//! Events - progress notifications emitted while a task moves through its stages.
//!
//! These are a side channel for observability only. Nothing in the result
//! contract depends on them being delivered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BatchId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Acquire,
    Transform,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Acquire => f.write_str("acquire"),
            Stage::Transform => f.write_str("transform"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Started,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub batch_id: BatchId,
    pub task: String,
    pub stage: Stage,
    pub phase: Phase,
    pub at: DateTime<Utc>,
}
