//! Data models for the frames-link client library.
//!
//! Defines the request structures for the five client operations, the
//! frame data model, and the wire-level message types exchanged with the
//! transport.

pub mod create_request;
pub mod delete_request;
pub mod exec_request;
pub mod frame;
pub mod frame_data_type;
pub mod read_request;
pub mod schema_field;
pub mod session;
pub mod wire_frame;
pub mod write_message;
pub mod write_request;


pub use create_request::CreateRequest;
pub use delete_request::DeleteRequest;
pub use exec_request::ExecRequest;
pub use frame::Frame;
pub use frame_data_type::FrameDataType;
pub use read_request::ReadRequest;
pub use schema_field::SchemaField;
pub use session::Session;
pub use wire_frame::WireFrame;
pub use write_message::{InitialWriteRequest, WriteMessage};
pub use write_request::WriteRequest;
