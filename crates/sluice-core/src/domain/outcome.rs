//! Outcome model: the settled result of one task.
//!
//! Every task in a batch produces exactly one `Outcome`. The serialized shape is
//! what ends up in the response body:
//! `{"name": "...", "status": "success"}` or
//! `{"name": "...", "status": "failed", "error": "..."}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success { name: String },
    Failed { name: String, error: String },
}

impl Outcome {
    pub fn success(name: impl Into<String>) -> Self {
        Self::Success { name: name.into() }
    }

    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failed {
            name: name.into(),
            error: error.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Success { name } | Self::Failed { name, .. } => name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure message, if the task failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_without_error_field() {
        let v = serde_json::to_value(Outcome::success("a.gz")).unwrap();
        assert_eq!(v, json!({ "name": "a.gz", "status": "success" }));
        assert!(v.get("error").is_none());
    }

    #[test]
    fn failed_serializes_with_error_field() {
        let v = serde_json::to_value(Outcome::failed("d.gz", "boom")).unwrap();
        assert_eq!(
            v,
            json!({ "name": "d.gz", "status": "failed", "error": "boom" })
        );
    }

    #[test]
    fn accessors() {
        let ok = Outcome::success("a");
        assert_eq!(ok.name(), "a");
        assert!(ok.is_success());
        assert_eq!(ok.error(), None);

        let ko = Outcome::failed("b", "nope");
        assert_eq!(ko.name(), "b");
        assert!(!ko.is_success());
        assert_eq!(ko.error(), Some("nope"));
    }
}
