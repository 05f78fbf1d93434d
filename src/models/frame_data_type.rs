use serde::{Deserialize, Serialize};

/// Column data types supported by the frames wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameDataType {
    Boolean,
    Integer,
    Float,
    String,
    Time,
}

impl Default for FrameDataType {
    fn default() -> Self {
        Self::String
    }
}
