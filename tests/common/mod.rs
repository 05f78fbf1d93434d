//! In-memory fakes for driving the client without a real backend.
//!
//! `MockTransport` scripts the read side and records everything the
//! client sends on the write and unary sides. `PoisonCodec` injects
//! encode failures for frames labeled "poison".

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use frames_link::{
    CreateRequest, DeleteRequest, ExecRequest, Frame, FrameCodec, FramesClient, FramesLinkError,
    JsonFrameCodec, ReadRequest, ReadStream, Result, Transport, WireFrame, WriteMessage,
    WriteStream,
};

/// One scripted step on the read stream; the stream ends cleanly once the
/// script is exhausted.
pub enum ReadStep {
    Message(WireFrame),
    Fail(String),
}

/// What the fake backend observed on the write stream, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteEvent {
    Message(WriteMessage),
    Closed,
}

#[derive(Default)]
pub struct MockTransport {
    read_steps: Mutex<VecDeque<ReadStep>>,
    read_open_error: Mutex<Option<FramesLinkError>>,
    pub read_requests: Mutex<Vec<ReadRequest>>,

    write_open_error: Mutex<Option<FramesLinkError>>,
    fail_send_at: Mutex<Option<usize>>,
    hang_on_close: AtomicBool,
    write_log: Arc<Mutex<Vec<WriteEvent>>>,
    send_count: Arc<AtomicUsize>,
    pub write_streams_opened: AtomicUsize,

    unary_error: Mutex<Option<FramesLinkError>>,
    pub create_requests: Mutex<Vec<CreateRequest>>,
    pub delete_requests: Mutex<Vec<DeleteRequest>>,
    pub exec_requests: Mutex<Vec<ExecRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script a stream of frames followed by a clean end of stream.
    pub fn with_frames(frames: &[Frame]) -> Arc<Self> {
        let transport = Self::new();
        for frame in frames {
            transport.push_frame(frame);
        }
        transport
    }

    pub fn push_frame(&self, frame: &Frame) {
        let message = JsonFrameCodec::new().encode(frame).unwrap();
        self.push_raw(message);
    }

    pub fn push_raw(&self, message: WireFrame) {
        self.read_steps
            .lock()
            .unwrap()
            .push_back(ReadStep::Message(message));
    }

    pub fn push_receive_error(&self, message: &str) {
        self.read_steps
            .lock()
            .unwrap()
            .push_back(ReadStep::Fail(message.to_string()));
    }

    pub fn set_read_open_error(&self, error: FramesLinkError) {
        *self.read_open_error.lock().unwrap() = Some(error);
    }

    pub fn set_write_open_error(&self, error: FramesLinkError) {
        *self.write_open_error.lock().unwrap() = Some(error);
    }

    pub fn set_unary_error(&self, error: FramesLinkError) {
        *self.unary_error.lock().unwrap() = Some(error);
    }

    /// Fail the nth send (zero-based; the handshake is send 0).
    pub fn fail_send_at(&self, index: usize) {
        *self.fail_send_at.lock().unwrap() = Some(index);
    }

    /// Never acknowledge the final close, so `finish` waits forever.
    pub fn hang_on_close(&self) {
        self.hang_on_close.store(true, Ordering::SeqCst);
    }

    pub fn write_events(&self) -> Vec<WriteEvent> {
        self.write_log.lock().unwrap().clone()
    }

    pub fn sends(&self) -> usize {
        self.send_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn read_stream(&self, request: &ReadRequest) -> Result<Box<dyn ReadStream>> {
        self.read_requests.lock().unwrap().push(request.clone());
        if let Some(error) = self.read_open_error.lock().unwrap().clone() {
            return Err(error);
        }
        let steps = std::mem::take(&mut *self.read_steps.lock().unwrap());
        Ok(Box::new(MockReadStream { steps }))
    }

    async fn write_stream(&self) -> Result<Box<dyn WriteStream>> {
        if let Some(error) = self.write_open_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.write_streams_opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockWriteStream {
            log: Arc::clone(&self.write_log),
            send_count: Arc::clone(&self.send_count),
            fail_send_at: *self.fail_send_at.lock().unwrap(),
            hang_on_close: self.hang_on_close.load(Ordering::SeqCst),
        }))
    }

    async fn create(&self, request: &CreateRequest) -> Result<()> {
        self.create_requests.lock().unwrap().push(request.clone());
        match self.unary_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn delete(&self, request: &DeleteRequest) -> Result<()> {
        self.delete_requests.lock().unwrap().push(request.clone());
        match self.unary_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn exec(&self, request: &ExecRequest) -> Result<()> {
        self.exec_requests.lock().unwrap().push(request.clone());
        match self.unary_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

struct MockReadStream {
    steps: VecDeque<ReadStep>,
}

#[async_trait]
impl ReadStream for MockReadStream {
    async fn recv(&mut self) -> Result<Option<WireFrame>> {
        match self.steps.pop_front() {
            Some(ReadStep::Message(message)) => Ok(Some(message)),
            Some(ReadStep::Fail(message)) => Err(FramesLinkError::TransportError(message)),
            None => Ok(None),
        }
    }
}

struct MockWriteStream {
    log: Arc<Mutex<Vec<WriteEvent>>>,
    send_count: Arc<AtomicUsize>,
    fail_send_at: Option<usize>,
    hang_on_close: bool,
}

#[async_trait]
impl WriteStream for MockWriteStream {
    async fn send(&mut self, message: WriteMessage) -> Result<()> {
        let index = self.send_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_send_at == Some(index) {
            return Err(FramesLinkError::TransportError("send failed".to_string()));
        }
        self.log.lock().unwrap().push(WriteEvent::Message(message));
        Ok(())
    }

    async fn close_and_recv(&mut self) -> Result<()> {
        if self.hang_on_close {
            std::future::pending::<()>().await;
        }
        self.log.lock().unwrap().push(WriteEvent::Closed);
        Ok(())
    }
}

/// Codec that refuses to encode frames labeled "poison"; everything else
/// is delegated to [`JsonFrameCodec`].
#[derive(Default)]
pub struct PoisonCodec {
    inner: JsonFrameCodec,
}

impl FrameCodec for PoisonCodec {
    fn encode(&self, frame: &Frame) -> Result<WireFrame> {
        if frame.labels.contains_key("poison") {
            return Err(FramesLinkError::EncodingError("poisoned frame".to_string()));
        }
        self.inner.encode(frame)
    }

    fn decode(&self, message: WireFrame) -> Result<Frame> {
        self.inner.decode(message)
    }
}

/// Client wired to the given transport with the default JSON codec.
pub fn client_for(transport: Arc<MockTransport>) -> FramesClient {
    FramesClient::builder()
        .transport(transport)
        .build()
        .unwrap()
}

/// Small frame with a single integer column, distinguishable by value.
pub fn sample_frame(value: i64) -> Frame {
    use frames_link::{FrameDataType, SchemaField};
    use serde_json::json;

    Frame::new(
        vec![SchemaField::new("value", FrameDataType::Integer)],
        vec![vec![json!(value)]],
    )
}
