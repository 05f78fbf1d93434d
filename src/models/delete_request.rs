use serde::{Deserialize, Serialize};

use super::session::Session;

/// Request to delete data from a table, or the table itself.
///
/// With no filter and no time range the whole table is removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRequest {
    /// Backend to delete from
    pub backend: String,

    /// Table to delete from
    pub table: String,

    /// Row filter expression; empty means all rows
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// Start of the deletion time range (backend time format)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start: String,

    /// End of the deletion time range (backend time format)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end: String,

    /// Session override; `None` means use the client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl DeleteRequest {
    /// Create a deletion request for a backend and table.
    pub fn new(backend: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            table: table.into(),
            ..Default::default()
        }
    }
}
