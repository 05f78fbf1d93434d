use bytes::Bytes;

/// An encoded frame message as it travels on the wire.
///
/// The payload layout belongs to the codec; the client and the stream
/// adapters only move it around.
#[derive(Debug, Clone, PartialEq)]
pub struct WireFrame {
    /// Encoded frame payload
    pub payload: Bytes,
}

impl WireFrame {
    /// Wrap an encoded payload.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
