use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::session::Session;

/// Request to create a table on a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRequest {
    /// Backend to create the table on
    pub backend: String,

    /// Table to create
    pub table: String,

    /// Backend-specific creation attributes (e.g. shard count, retention)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, JsonValue>,

    /// Session override; `None` means use the client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl CreateRequest {
    /// Create a table-creation request for a backend and table.
    pub fn new(backend: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            table: table.into(),
            ..Default::default()
        }
    }
}
