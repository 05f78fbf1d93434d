use super::session::Session;
use super::wire_frame::WireFrame;

/// A message sent on a write stream.
///
/// The first message on every write stream is `Initial`; every message
/// after that carries one encoded frame.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteMessage {
    /// Handshake opening the write, sent exactly once by the client
    Initial(InitialWriteRequest),

    /// One encoded frame appended by the caller
    Frame(WireFrame),
}

/// The handshake message opening a write stream.
///
/// Carries everything the backend needs to start the write: target
/// backend and table, an optional inline first frame, the write
/// expression, and whether more frames follow.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialWriteRequest {
    /// Backend to write to
    pub backend: String,

    /// Table to write
    pub table: String,

    /// Optional first frame, already encoded
    pub initial_data: Option<WireFrame>,

    /// Server-side write expression
    pub expression: String,

    /// True when more frames follow on the stream
    pub more: bool,

    /// Session resolved by the client (request session or client default)
    pub session: Option<Session>,
}
