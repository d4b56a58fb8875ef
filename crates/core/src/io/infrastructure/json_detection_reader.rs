use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::io::domain::detection_reader::DetectionReader;
use crate::io::domain::io_error::IoError;
use crate::shared::detection::Detection;

/// Reads a JSON array of detection records.
///
/// Each record needs `detection_id` and `feature`; camera, frame and box
/// fields are optional and anything else is ignored.
#[derive(Debug, Default)]
pub struct JsonDetectionReader;

impl JsonDetectionReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Detection>, IoError> {
        serde_json::from_reader(reader).map_err(IoError::Parse)
    }
}

impl DetectionReader for JsonDetectionReader {
    fn read(&self, path: &Path) -> Result<Vec<Detection>, IoError> {
        let file = File::open(path).map_err(|source| IoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let detections = self.read_from(BufReader::new(file))?;
        log::debug!("Loaded {} detections from {}", detections.len(), path.display());
        Ok(detections)
    }
}
