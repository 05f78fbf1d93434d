//! Transport abstraction for the frames service.
//!
//! The client drives the protocol through these traits and never touches a
//! socket directly, so it can run against gRPC, HTTP/2, or an in-memory
//! fake in tests. Connection setup, security negotiation, and the binary
//! encoding of wire messages all live behind this boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    CreateRequest, DeleteRequest, ExecRequest, ReadRequest, WireFrame, WriteMessage,
};

/// A connection to a frames backend.
///
/// Implementations must be cheap to share (`&self` methods only); each
/// streaming call hands back a dedicated stream handle that the caller
/// owns exclusively.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Open a server-streaming read call.
    ///
    /// No data is transferred until the returned stream's `recv` is called.
    async fn read_stream(&self, request: &ReadRequest) -> Result<Box<dyn ReadStream>>;

    /// Open a client-streaming write call.
    ///
    /// The stream carries no request; the client sends the handshake as
    /// the first message.
    async fn write_stream(&self) -> Result<Box<dyn WriteStream>>;

    /// Create a table (unary call).
    async fn create(&self, request: &CreateRequest) -> Result<()>;

    /// Delete data or a table (unary call).
    async fn delete(&self, request: &DeleteRequest) -> Result<()>;

    /// Execute a backend command (unary call).
    async fn exec(&self, request: &ExecRequest) -> Result<()>;
}

/// Receiving side of a server-streaming read call.
#[async_trait]
pub trait ReadStream: Send {
    /// Receive the next wire message.
    ///
    /// `Ok(Some(message))` for a message, `Ok(None)` on clean end of
    /// stream, `Err` on a transport failure.
    async fn recv(&mut self) -> Result<Option<WireFrame>>;
}

/// Sending side of a client-streaming write call.
#[async_trait]
pub trait WriteStream: Send {
    /// Send one message, subject to transport flow control.
    async fn send(&mut self, message: WriteMessage) -> Result<()>;

    /// Signal end-of-input and wait for the backend's final response.
    ///
    /// Releases the stream handle; the stream must not be used afterwards.
    async fn close_and_recv(&mut self) -> Result<()>;
}
