use std::path::Path;

use crate::io::domain::io_error::IoError;
use crate::shared::detection::DetectionId;

/// Domain interface for persisting identity groups.
pub trait GroupWriter {
    fn write(&self, path: &Path, groups: &[Vec<DetectionId>]) -> Result<(), IoError>;
}
