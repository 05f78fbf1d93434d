//! Main frames client with builder pattern.
//!
//! Provides the primary interface for talking to a frames backend:
//! streaming reads and writes plus the unary create/delete/exec
//! operations, all dispatched through a pluggable [`Transport`].

use std::sync::Arc;

use log::{debug, warn};

use crate::codec::{FrameCodec, JsonFrameCodec};
use crate::error::{FramesLinkError, Result};
use crate::models::{
    CreateRequest, DeleteRequest, ExecRequest, InitialWriteRequest, ReadRequest, Session,
    WireFrame, WriteMessage, WriteRequest,
};
use crate::read::FrameIterator;
use crate::timeouts::FramesLinkTimeouts;
use crate::transport::Transport;
use crate::write::FrameAppender;

/// Main frames client.
///
/// Use [`FramesClientBuilder`] to construct instances. The client holds no
/// per-call state: independent `read`/`write`/`create`/`delete`/`exec`
/// calls may run concurrently, each producing its own stream adapter or
/// unary result.
///
/// # Examples
///
/// ```rust,ignore
/// use frames_link::{FramesClient, ReadRequest, Session};
///
/// let client = FramesClient::builder()
///     .transport(transport) // any Arc<dyn Transport>
///     .session(Session::with_token("t0ps3cret"))
///     .build()?;
///
/// let mut frames = client.read(ReadRequest::new("kv", "trades")).await?;
/// while frames.advance().await {
///     println!("{} rows", frames.current().unwrap().len());
/// }
/// ```
#[derive(Clone)]
pub struct FramesClient {
    transport: Arc<dyn Transport>,
    codec: Arc<dyn FrameCodec>,
    session: Option<Session>,
    timeouts: FramesLinkTimeouts,
}

impl FramesClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> FramesClientBuilder {
        FramesClientBuilder::new()
    }

    /// Open a streaming read and return a lazy frame iterator.
    ///
    /// No data is transferred until the iterator's first
    /// [`advance`](FrameIterator::advance); a stream-open failure is
    /// returned here, unchanged.
    pub async fn read(&self, mut request: ReadRequest) -> Result<FrameIterator> {
        self.default_session(&mut request.session);
        debug!(
            "[LINK_READ] Opening read stream: backend={} table={}",
            request.backend, request.table
        );

        let stream = self.transport.read_stream(&request).await?;
        Ok(FrameIterator::new(stream, Arc::clone(&self.codec)))
    }

    /// Open a streaming write and return an appender.
    ///
    /// Any `immediate_data` frame is encoded before the stream is opened,
    /// so an encode failure aborts without touching the network. The
    /// handshake message is sent here; if that send fails the stream is
    /// closed (best effort) and the send error returned.
    pub async fn write(&self, mut request: WriteRequest) -> Result<FrameAppender> {
        self.default_session(&mut request.session);

        let initial_data: Option<WireFrame> = match &request.immediate_data {
            Some(frame) => Some(self.codec.encode(frame)?),
            None => None,
        };

        debug!(
            "[LINK_WRITE] Opening write stream: backend={} table={} inline_frame={}",
            request.backend,
            request.table,
            initial_data.is_some()
        );
        let mut stream = self.transport.write_stream().await?;

        let handshake = WriteMessage::Initial(InitialWriteRequest {
            backend: request.backend,
            table: request.table,
            initial_data,
            expression: request.expression,
            more: request.have_more,
            session: request.session,
        });

        if let Err(e) = stream.send(handshake).await {
            warn!("[LINK_WRITE] Handshake send failed: {}", e);
            // Never leave the stream half-open; the close outcome is
            // discarded in favor of the send error.
            let _ = stream.close_and_recv().await;
            return Err(e);
        }

        Ok(FrameAppender::new(stream, Arc::clone(&self.codec)))
    }

    /// Create a table.
    pub async fn create(&self, mut request: CreateRequest) -> Result<()> {
        self.default_session(&mut request.session);
        debug!(
            "[LINK_UNARY] create: backend={} table={}",
            request.backend, request.table
        );
        self.transport.create(&request).await
    }

    /// Delete data or a table.
    pub async fn delete(&self, mut request: DeleteRequest) -> Result<()> {
        self.default_session(&mut request.session);
        debug!(
            "[LINK_UNARY] delete: backend={} table={}",
            request.backend, request.table
        );
        self.transport.delete(&request).await
    }

    /// Execute a command on a backend.
    pub async fn exec(&self, mut request: ExecRequest) -> Result<()> {
        self.default_session(&mut request.session);
        debug!(
            "[LINK_UNARY] exec: backend={} table={} command={}",
            request.backend, request.table, request.command
        );
        self.transport.exec(&request).await
    }

    /// Get the configured timeouts.
    pub fn timeouts(&self) -> &FramesLinkTimeouts {
        &self.timeouts
    }

    /// Get the configured default session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Fill in the client's default session when the request carries none.
    fn default_session(&self, session: &mut Option<Session>) {
        if session.is_none() {
            *session = self.session.clone();
        }
    }
}

/// Builder for configuring [`FramesClient`] instances.
pub struct FramesClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    codec: Option<Arc<dyn FrameCodec>>,
    session: Option<Session>,
    timeouts: FramesLinkTimeouts,
}

impl FramesClientBuilder {
    fn new() -> Self {
        Self {
            transport: None,
            codec: None,
            session: None,
            timeouts: FramesLinkTimeouts::default(),
        }
    }

    /// Set the transport carrying the wire protocol (required).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the frame codec. Defaults to [`JsonFrameCodec`].
    pub fn codec(mut self, codec: Arc<dyn FrameCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Set the default session injected into requests that carry none.
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the timeout configuration for all operations.
    pub fn timeouts(mut self, timeouts: FramesLinkTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FramesClient> {
        let transport = self.transport.ok_or_else(|| {
            FramesLinkError::ConfigurationError("transport is required".to_string())
        })?;

        Ok(FramesClient {
            transport,
            codec: self
                .codec
                .unwrap_or_else(|| Arc::new(JsonFrameCodec::new())),
            session: self.session,
            timeouts: self.timeouts,
        })
    }
}

impl Default for FramesClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
