use std::path::Path;

use crate::io::domain::io_error::IoError;
use crate::shared::detection::Detection;

/// Domain interface for loading detections from persisted storage.
pub trait DetectionReader {
    fn read(&self, path: &Path) -> Result<Vec<Detection>, IoError>;
}
