//! Error types for frames-link.

use thiserror::Error;

/// Errors that can occur in frames client operations.
///
/// Transport, encoding, and decoding failures are kept as distinct
/// variants so callers can tell a broken connection apart from a bad
/// payload. `StreamClosed` is a protocol-state error: the operation was
/// issued against an adapter that already reached its terminal state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FramesLinkError {
    /// Stream open, send, or receive failure reported by the transport.
    /// Never retried by the client; propagated to the caller as-is.
    #[error("Transport error: {0}")]
    TransportError(String),

    /// A frame could not be converted into a wire message.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// A received wire message could not be converted into a frame.
    #[error("Decoding error: {0}")]
    DecodingError(String),

    /// Operation on an iterator or appender that is already terminal.
    #[error("Stream closed")]
    StreamClosed,

    /// A bounded wait expired before the backend responded.
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// Client was misconfigured (e.g. missing transport).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type for frames client operations.
pub type Result<T> = std::result::Result<T, FramesLinkError>;
