use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use super::schema_field::SchemaField;

/// A unit of tabular data exchanged with the backend.
///
/// The client treats frames as opaque: only the
/// [`FrameCodec`](crate::FrameCodec) converts them to and from wire
/// messages, the stream adapters never look inside.
///
/// # Examples
///
/// ```rust
/// use frames_link::{Frame, FrameDataType, SchemaField};
/// use serde_json::json;
///
/// let frame = Frame::new(
///     vec![
///         SchemaField::new("symbol", FrameDataType::String),
///         SchemaField::new("price", FrameDataType::Float),
///     ],
///     vec![
///         vec![json!("AAPL"), json!(187.4)],
///         vec![json!("MSFT"), json!(410.1)],
///     ],
/// );
/// assert_eq!(frame.len(), 2);
/// assert_eq!(frame.column_names(), vec!["symbol", "price"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Column schema, in column order
    pub schema: Vec<SchemaField>,

    /// Row-major data; each inner vector matches the schema order
    pub rows: Vec<Vec<JsonValue>>,

    /// Frame-level metadata labels
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl Frame {
    /// Create a frame from a schema and row data.
    pub fn new(schema: Vec<SchemaField>, rows: Vec<Vec<JsonValue>>) -> Self {
        Self {
            schema,
            rows,
            labels: HashMap::new(),
        }
    }

    /// Number of rows in the frame.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.iter().map(|field| field.name.as_str()).collect()
    }

    /// Attach a metadata label, returning the frame for chaining.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}
