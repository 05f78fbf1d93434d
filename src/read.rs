//! `FrameIterator` – pull-based consumer handle for a single read stream.
//!
//! Wraps the server-streaming call opened by
//! [`FramesClient::read`](crate::FramesClient::read) and surfaces it as a
//! forward-only sequence of frames. One wire message is in flight at a
//! time; frames arrive in the order the backend sent them.

use std::sync::Arc;

use log::{debug, warn};

use crate::codec::FrameCodec;
use crate::error::{FramesLinkError, Result};
use crate::models::Frame;
use crate::transport::ReadStream;

/// Terminal state is sticky: once the iterator leaves `Active` it never
/// comes back, and `advance()` short-circuits on a single check.
#[derive(Debug)]
enum ReadState {
    Active,
    Done,
    Failed(FramesLinkError),
}

/// Lazy, forward-only iterator over the frames of one read stream.
///
/// Drive it with [`advance`](Self::advance), then inspect
/// [`current`](Self::current). After `advance()` returns `false`, check
/// [`error`](Self::error) to tell clean end-of-stream from failure.
///
/// # Examples
///
/// ```rust,ignore
/// let mut frames = client.read(ReadRequest::new("kv", "trades")).await?;
/// while frames.advance().await {
///     let frame = frames.current().unwrap();
///     println!("{} rows", frame.len());
/// }
/// if let Some(err) = frames.error() {
///     eprintln!("read failed: {err}");
/// }
/// ```
pub struct FrameIterator {
    stream: Box<dyn ReadStream>,
    codec: Arc<dyn FrameCodec>,
    current: Option<Frame>,
    state: ReadState,
}

impl std::fmt::Debug for FrameIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameIterator")
            .field("current", &self.current)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl FrameIterator {
    pub(crate) fn new(stream: Box<dyn ReadStream>, codec: Arc<dyn FrameCodec>) -> Self {
        Self {
            stream,
            codec,
            current: None,
            state: ReadState::Active,
        }
    }

    /// Receive and decode the next frame.
    ///
    /// Returns `true` when a frame is available via [`current`](Self::current).
    /// Returns `false` on end of stream or failure, and on every call after
    /// that; no reconnection or retry is attempted.
    pub async fn advance(&mut self) -> bool {
        if !matches!(self.state, ReadState::Active) {
            return false;
        }

        self.current = None;
        match self.stream.recv().await {
            Ok(Some(message)) => match self.codec.decode(message) {
                Ok(frame) => {
                    self.current = Some(frame);
                    true
                },
                Err(e) => {
                    warn!("[LINK_READ] Dropping undecodable message: {}", e);
                    self.state = ReadState::Failed(e);
                    false
                },
            },
            Ok(None) => {
                debug!("[LINK_READ] Stream ended cleanly");
                self.state = ReadState::Done;
                false
            },
            Err(e) => {
                warn!("[LINK_READ] Receive failed: {}", e);
                self.state = ReadState::Failed(e);
                false
            },
        }
    }

    /// The most recently decoded frame, if any.
    pub fn current(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    /// The terminal error, if the stream failed.
    ///
    /// `None` after a clean end of stream.
    pub fn error(&self) -> Option<&FramesLinkError> {
        match &self.state {
            ReadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// True once the iterator has reached end of stream or failed.
    pub fn is_terminated(&self) -> bool {
        !matches!(self.state, ReadState::Active)
    }

    /// Drain the remaining frames into a vector.
    ///
    /// Consumes the iterator; a clean end of stream yields the collected
    /// frames, any failure yields the terminal error instead.
    pub async fn collect(mut self) -> Result<Vec<Frame>> {
        let mut frames = Vec::new();
        while self.advance().await {
            if let Some(frame) = self.current.take() {
                frames.push(frame);
            }
        }
        match self.state {
            ReadState::Failed(e) => Err(e),
            _ => Ok(frames),
        }
    }
}
