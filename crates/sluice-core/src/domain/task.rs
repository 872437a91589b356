use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One unit of work: a simulated acquire step followed by a transform step.
///
/// `name` is the identity used for reporting and must be unique within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,

    /// How long the acquire stage takes, in milliseconds.
    pub acquire_ms: u64,

    /// How long the transform stage takes, in milliseconds.
    pub transform_ms: u64,

    /// Make the acquire stage fail after its delay.
    #[serde(default)]
    pub force_failure: bool,
}

impl TaskSpec {
    pub fn new(name: impl Into<String>, acquire_ms: u64, transform_ms: u64) -> Self {
        Self {
            name: name.into(),
            acquire_ms,
            transform_ms,
            force_failure: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.force_failure = true;
        self
    }

    pub fn acquire_delay(&self) -> Duration {
        Duration::from_millis(self.acquire_ms)
    }

    pub fn transform_delay(&self) -> Duration {
        Duration::from_millis(self.transform_ms)
    }

    pub fn total_delay(&self) -> Duration {
        self.acquire_delay() + self.transform_delay()
    }
}

impl fmt::Display for TaskSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_failure_defaults_to_false() {
        let json = r#"{ "name": "a.gz", "acquire_ms": 10, "transform_ms": 5 }"#;
        let task: TaskSpec = serde_json::from_str(json).expect("deserialize");
        assert!(!task.force_failure);
        assert_eq!(task.acquire_delay(), Duration::from_millis(10));
        assert_eq!(task.transform_delay(), Duration::from_millis(5));
    }

    #[test]
    fn displays_as_name() {
        let task = TaskSpec::new("media-pack.gz", 1000, 1200);
        assert_eq!(task.to_string(), "media-pack.gz");
    }

    #[test]
    fn total_delay_sums_both_stages() {
        let task = TaskSpec::new("a.gz", 1200, 800);
        assert_eq!(task.total_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn failing_sets_flag_only() {
        let task = TaskSpec::new("d.gz", 1500, 0).failing();
        assert!(task.force_failure);
        assert_eq!(task.name, "d.gz");
        assert_eq!(task.acquire_ms, 1500);
    }
}
