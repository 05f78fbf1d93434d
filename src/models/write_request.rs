use serde::{Deserialize, Serialize};

use super::frame::Frame;
use super::session::Session;

/// Request to write a stream of frames into a table.
///
/// Consumed by [`FramesClient::write`](crate::FramesClient::write) to build
/// the initial handshake message; any `immediate_data` frame is encoded and
/// sent inline with the handshake, further frames are pushed through the
/// returned [`FrameAppender`](crate::FrameAppender).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteRequest {
    /// Backend to write to
    pub backend: String,

    /// Table to write
    pub table: String,

    /// Optional first frame, shipped inside the handshake message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate_data: Option<Frame>,

    /// Server-side write expression
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub expression: String,

    /// True when more frames follow via the appender
    #[serde(default)]
    pub have_more: bool,

    /// Session override; `None` means use the client default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
}

impl WriteRequest {
    /// Create a write request for a backend and table.
    pub fn new(backend: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            table: table.into(),
            ..Default::default()
        }
    }
}
