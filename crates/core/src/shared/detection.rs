use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque detection identifier as it appears in the input records.
///
/// Integer ids round-trip as JSON numbers, anything else as strings.
/// Integers above `i64::MAX` land in `Unsigned`. Fractional numbers such
/// as `3.5` or `3.0` are not valid ids and fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetectionId {
    Int(i64),
    Unsigned(u64),
    Text(String),
}

impl fmt::Display for DetectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectionId::Int(id) => write!(f, "{id}"),
            DetectionId::Unsigned(id) => write!(f, "{id}"),
            DetectionId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for DetectionId {
    fn from(id: i64) -> Self {
        DetectionId::Int(id)
    }
}

impl From<&str> for DetectionId {
    fn from(id: &str) -> Self {
        DetectionId::Text(id.to_string())
    }
}

impl From<String> for DetectionId {
    fn from(id: String) -> Self {
        DetectionId::Text(id)
    }
}

/// One observation of a person in one camera frame.
///
/// Only `id` and `embedding` are consumed by the grouping engine. Camera,
/// frame and box metadata are kept as raw JSON, whatever their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(rename = "detection_id")]
    pub id: DetectionId,
    #[serde(rename = "feature")]
    pub embedding: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Value>,
}

impl Detection {
    pub fn new(id: impl Into<DetectionId>, embedding: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            embedding,
            camera_id: None,
            frame_id: None,
            bbox: None,
        }
    }

    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}
