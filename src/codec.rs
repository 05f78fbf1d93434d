//! Frame codec boundary.
//!
//! Converts between [`Frame`] values and the wire messages the transport
//! moves. The stream adapters call through this trait only, so alternative
//! encodings (Arrow, protobuf) plug in without touching the protocol
//! logic. [`JsonFrameCodec`] is the shipped default.

use crate::error::{FramesLinkError, Result};
use crate::models::{Frame, WireFrame};

/// Converts frames to and from wire messages.
pub trait FrameCodec: Send + Sync {
    /// Encode a frame into a wire message.
    fn encode(&self, frame: &Frame) -> Result<WireFrame>;

    /// Decode a wire message into a frame.
    fn decode(&self, message: WireFrame) -> Result<Frame>;
}

/// Default codec: frames as JSON payloads.
#[derive(Debug, Clone, Default)]
pub struct JsonFrameCodec;

impl JsonFrameCodec {
    pub fn new() -> Self {
        Self
    }
}

impl FrameCodec for JsonFrameCodec {
    fn encode(&self, frame: &Frame) -> Result<WireFrame> {
        let payload = serde_json::to_vec(frame)
            .map_err(|e| FramesLinkError::EncodingError(e.to_string()))?;
        Ok(WireFrame::new(payload))
    }

    fn decode(&self, message: WireFrame) -> Result<Frame> {
        serde_json::from_slice(&message.payload)
            .map_err(|e| FramesLinkError::DecodingError(e.to_string()))
    }
}
