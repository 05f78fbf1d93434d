use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::session::Session;

/// Request to execute a backend-specific command on a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecRequest {
    /// Backend to execute on
    pub backend: String,

    /// Table the command applies to
    pub table: String,

    /// Command name (e.g. "infer", "ingest")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,

    /// Command arguments
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub args: HashMap<String, JsonValue>,

    /// Command expression
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expression: String,

    /// Session override; `None` means use the client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl ExecRequest {
    /// Create an exec request for a backend and table.
    pub fn new(backend: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            table: table.into(),
            ..Default::default()
        }
    }
}
