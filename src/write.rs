//! `FrameAppender` – push-based producer handle for a single write stream.
//!
//! Wraps the client-streaming call opened by
//! [`FramesClient::write`](crate::FramesClient::write). The handshake
//! message has already been sent by the time an appender exists; every
//! [`append`](FrameAppender::append) ships one more frame, and
//! [`finish`](FrameAppender::finish) closes the stream and waits for the
//! backend's acknowledgment.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::codec::FrameCodec;
use crate::error::{FramesLinkError, Result};
use crate::models::{Frame, WriteMessage};
use crate::timeouts::FramesLinkTimeouts;
use crate::transport::WriteStream;

/// Closed is terminal: any failed append closes the stream, and no append
/// succeeds afterwards.
#[derive(Debug, PartialEq)]
enum WriteState {
    Open,
    Closed,
}

/// Appender for pushing frames onto one write stream.
///
/// Appended frames reach the backend in call order, preceded by the
/// handshake message. Any error from `append` or `finish` is stream-fatal:
/// the appender is closed and further appends fail with
/// [`FramesLinkError::StreamClosed`].
///
/// # Examples
///
/// ```rust,ignore
/// let mut appender = client.write(WriteRequest::new("kv", "trades")).await?;
/// appender.append(&frame).await?;
/// appender.finish(Duration::from_secs(30)).await?;
/// ```
pub struct FrameAppender {
    stream: Box<dyn WriteStream>,
    codec: Arc<dyn FrameCodec>,
    state: WriteState,
}

impl std::fmt::Debug for FrameAppender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameAppender")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl FrameAppender {
    pub(crate) fn new(stream: Box<dyn WriteStream>, codec: Arc<dyn FrameCodec>) -> Self {
        Self {
            stream,
            codec,
            state: WriteState::Open,
        }
    }

    /// Encode and send one frame.
    ///
    /// On encode or send failure the stream is closed (best effort) and
    /// the original error is returned; the appender is terminal from that
    /// point on.
    pub async fn append(&mut self, frame: &Frame) -> Result<()> {
        if self.state == WriteState::Closed {
            return Err(FramesLinkError::StreamClosed);
        }

        let message = match self.codec.encode(frame) {
            Ok(wire) => WriteMessage::Frame(wire),
            Err(e) => {
                warn!("[LINK_WRITE] Encode failed, closing stream: {}", e);
                self.abort().await;
                return Err(e);
            },
        };

        if let Err(e) = self.stream.send(message).await {
            warn!("[LINK_WRITE] Send failed, closing stream: {}", e);
            self.abort().await;
            return Err(e);
        }

        Ok(())
    }

    /// Signal end-of-input and wait for the backend's final response.
    ///
    /// `timeout` bounds the wait; [`FramesLinkError::TimeoutError`] is
    /// returned when it expires. `Duration::ZERO` waits indefinitely.
    /// The appender is closed whether or not the backend acknowledged.
    pub async fn finish(&mut self, timeout: Duration) -> Result<()> {
        if self.state == WriteState::Closed {
            return Err(FramesLinkError::StreamClosed);
        }
        self.state = WriteState::Closed;

        debug!("[LINK_WRITE] Finishing write stream (timeout={:?})", timeout);
        if FramesLinkTimeouts::is_no_timeout(timeout) {
            return self.stream.close_and_recv().await;
        }

        match tokio::time::timeout(timeout, self.stream.close_and_recv()).await {
            Ok(result) => result,
            Err(_) => Err(FramesLinkError::TimeoutError(format!(
                "write not acknowledged within {:?}",
                timeout
            ))),
        }
    }

    /// True once the appender has been finished or failed.
    pub fn is_closed(&self) -> bool {
        self.state == WriteState::Closed
    }

    /// Best-effort release of the stream handle; the close's own outcome
    /// is discarded and the caller propagates the primary error.
    async fn abort(&mut self) {
        let _ = self.stream.close_and_recv().await;
        self.state = WriteState::Closed;
    }
}
