use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::io::domain::group_writer::GroupWriter;
use crate::io::domain::io_error::IoError;
use crate::shared::detection::DetectionId;

/// Writes identity groups as a JSON array of arrays of detection ids.
#[derive(Debug, Default)]
pub struct JsonGroupWriter {
    pretty: bool,
}

impl JsonGroupWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_to<W: Write>(
        &self,
        mut writer: W,
        groups: &[Vec<DetectionId>],
    ) -> Result<(), IoError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(groups)
        } else {
            serde_json::to_vec(groups)
        }
        .map_err(IoError::Encode)?;

        writer
            .write_all(&encoded)
            .and_then(|_| writer.write_all(b"\n"))
            .and_then(|_| writer.flush())
            .map_err(|source| IoError::Write {
                path: "<stream>".into(),
                source,
            })
    }
}

impl GroupWriter for JsonGroupWriter {
    fn write(&self, path: &Path, groups: &[Vec<DetectionId>]) -> Result<(), IoError> {
        let file = File::create(path).map_err(|source| IoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(BufWriter::new(file), groups)
            .map_err(|err| match err {
                IoError::Write { source, .. } => IoError::Write {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;
        log::debug!("Wrote {} groups to {}", groups.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<Vec<DetectionId>> {
        vec![
            vec![DetectionId::Int(1), DetectionId::Int(2)],
            vec![DetectionId::from("cam2-7")],
        ]
    }

    #[test]
    fn test_compact_output_preserves_id_kinds() {
        let mut buf = Vec::new();
        JsonGroupWriter::new().write_to(&mut buf, &groups()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[[1,2],[\"cam2-7\"]]\n");
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let mut buf = Vec::new();
        JsonGroupWriter::new()
            .with_pretty(true)
            .write_to(&mut buf, &groups())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\n'));
        let parsed: Vec<Vec<DetectionId>> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, groups());
    }

    #[test]
    fn test_empty_groups() {
        let mut buf = Vec::new();
        JsonGroupWriter::new().write_to(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn test_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groups.json");
        JsonGroupWriter::new().write(&path, &groups()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "[[1,2],[\"cam2-7\"]]");
    }

    #[test]
    fn test_unwritable_path_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("groups.json");
        let err = JsonGroupWriter::new().write(&path, &groups()).unwrap_err();
        assert!(err.to_string().contains("no_such_dir"));
    }
}
