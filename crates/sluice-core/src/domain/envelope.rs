//! Envelope - the status/headers/body triple handed back to the caller.
//!
//! Field names follow the API gateway proxy response shape (`statusCode`,
//! `headers`, `body`), with `body` holding a JSON document as a string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Envelope {
    /// Envelope with a `Content-Type: application/json` header.
    pub fn json(status_code: u16, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
