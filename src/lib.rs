//! # frames-link
//!
//! Client access layer for a remote "frames" tabular-data service.
//!
//! Exposes five operations against a frames backend: streaming `read` and
//! `write`, plus unary `create`, `delete`, and `exec`. The streaming
//! operations are surfaced as a pull-based [`FrameIterator`] and a
//! push-based [`FrameAppender`]; the underlying connection and the frame
//! encoding are pluggable through the [`Transport`] and [`FrameCodec`]
//! traits.
//!
//! ## Example
//!
//! ```ignore
//! use frames_link::{FramesClient, ReadRequest, Session, WriteRequest};
//! use std::time::Duration;
//!
//! let client = FramesClient::builder()
//!     .transport(transport) // your Arc<dyn Transport>
//!     .session(Session::with_token("t0ps3cret"))
//!     .build()?;
//!
//! // Streaming read
//! let mut frames = client.read(ReadRequest::new("kv", "trades")).await?;
//! while frames.advance().await {
//!     println!("{} rows", frames.current().unwrap().len());
//! }
//! if let Some(err) = frames.error() {
//!     return Err(err.clone());
//! }
//!
//! // Streaming write
//! let mut appender = client.write(WriteRequest::new("kv", "trades")).await?;
//! appender.append(&frame).await?;
//! appender.finish(Duration::from_secs(30)).await?;
//! ```
//!
//! Failures are never retried internally: every transport, encoding, or
//! decoding error is surfaced to the caller, who owns the retry policy.

pub mod codec;
pub mod error;
pub mod models;
pub mod timeouts;
pub mod transport;

mod client;
mod read;
mod write;

pub use client::{FramesClient, FramesClientBuilder};
pub use codec::{FrameCodec, JsonFrameCodec};
pub use error::{FramesLinkError, Result};
pub use models::{
    CreateRequest, DeleteRequest, ExecRequest, Frame, FrameDataType, InitialWriteRequest,
    ReadRequest, SchemaField, Session, WireFrame, WriteMessage, WriteRequest,
};
pub use read::FrameIterator;
pub use timeouts::{FramesLinkTimeouts, FramesLinkTimeoutsBuilder};
pub use transport::{ReadStream, Transport, WriteStream};
pub use write::FrameAppender;
