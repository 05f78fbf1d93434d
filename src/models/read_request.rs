use serde::{Deserialize, Serialize};

use super::session::Session;

/// Request to read a table as a stream of frames.
///
/// Handed to [`FramesClient::read`](crate::FramesClient::read) by value and
/// immutable afterwards; the client fills in `session` from its configured
/// default when the field is `None`.
///
/// # Examples
///
/// ```rust
/// use frames_link::ReadRequest;
///
/// let request = ReadRequest {
///     filter: "price > 100".to_string(),
///     limit: Some(1000),
///     ..ReadRequest::new("kv", "trades")
/// };
/// assert_eq!(request.table, "trades");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadRequest {
    /// Backend to read from (e.g. "kv", "tsdb", "stream")
    pub backend: String,

    /// Table to read
    pub table: String,

    /// Query expression; when set, overrides table/columns/filter
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,

    /// Columns to return; empty means all
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,

    /// Row filter expression
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// Maximum number of rows to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Maximum number of rows per wire message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_limit: Option<u64>,

    /// Resume marker from a previous read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Session override; `None` means use the client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl ReadRequest {
    /// Create a read request for a backend and table.
    pub fn new(backend: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            table: table.into(),
            ..Default::default()
        }
    }
}
