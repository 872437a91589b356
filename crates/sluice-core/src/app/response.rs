//! Response builder - maps a batch result (or fault) to an `Envelope`.
//!
//! Only two statuses come out of here: 200 with `{"results": [...]}` and 500
//! with `{"error": "..."}`. Partial task failure is still a 200.

use serde::Serialize;
use tracing::error;

use crate::domain::{BatchResult, Envelope, OrchestrationError, Outcome};

pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

#[derive(Serialize)]
struct ResultsBody<'a> {
    results: &'a [Outcome],
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub fn build_response(result: Result<BatchResult, OrchestrationError>) -> Envelope {
    match result {
        Ok(batch) => success_response(&batch),
        Err(e) => error_response(&e.to_string()),
    }
}

fn success_response(batch: &BatchResult) -> Envelope {
    let body = ResultsBody {
        results: batch.outcomes(),
    };
    match serde_json::to_string(&body) {
        Ok(json) => Envelope::json(STATUS_OK, json),
        Err(e) => {
            error!(error = %e, "failed to serialize batch result");
            error_response(&format!("failed to serialize batch result: {e}"))
        }
    }
}

/// 500 envelope carrying `message` in the `error` field.
pub fn error_response(message: &str) -> Envelope {
    let message = if message.is_empty() {
        "internal error"
    } else {
        message
    };
    // a struct holding one &str always serializes
    let body = serde_json::to_string(&ErrorBody { error: message })
        .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
    Envelope::json(STATUS_INTERNAL_ERROR, body)
}
