//! Batch definition: the ordered list of tasks one invocation runs.
//!
//! Kept as plain serde data so it can come from a JSON file as easily as from
//! code. Validation is separate from parsing so callers building specs by hand
//! get the same checks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::errors::SpecError;
use super::task::TaskSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSpec {
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl BatchSpec {
    pub fn new(tasks: Vec<TaskSpec>) -> Self {
        Self { tasks }
    }

    /// Parse and validate a JSON batch definition.
    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        let spec: BatchSpec = serde_json::from_str(json)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Names must be non-empty and unique, since they identify outcomes.
    pub fn validate(&self) -> Result<(), SpecError> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for (index, task) in self.tasks.iter().enumerate() {
            if task.name.trim().is_empty() {
                return Err(SpecError::EmptyTaskName { index });
            }
            if !seen.insert(task.name.as_str()) {
                return Err(SpecError::DuplicateTaskName(task.name.clone()));
            }
        }
        Ok(())
    }

    /// The built-in archive batch: five downloads, one of which fails.
    pub fn sample() -> Self {
        Self::new(vec![
            TaskSpec::new("archive-01.gz", 1200, 800),
            TaskSpec::new("document.gz", 800, 400),
            TaskSpec::new("backup-large.gz", 2000, 1500),
            TaskSpec::new("data-corrupt.gz", 1500, 0).failing(),
            TaskSpec::new("media-pack.gz", 1000, 1200),
        ])
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
