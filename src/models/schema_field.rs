use serde::{Deserialize, Serialize};

use super::frame_data_type::FrameDataType;

/// A column in a frame's schema.
///
/// Contains what a consumer needs to interpret column data: the name,
/// the data type, and whether values may be null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Column name
    pub name: String,

    /// Column data type
    pub data_type: FrameDataType,

    /// True when the column may contain nulls
    #[serde(default)]
    pub nullable: bool,
}

impl SchemaField {
    /// Create a non-nullable field.
    pub fn new(name: impl Into<String>, data_type: FrameDataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
        }
    }
}
