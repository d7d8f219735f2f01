//! Directory of `*.json` author files.
//!
//! # Invariants
//! - Files are visited in file-name order, so author order (and therefore
//!   every global poem index) is the same on every platform.
//! - Unreadable files and invalid JSON are skipped with a warning.

use super::{RecordSource, SourceError, SourceRecord, SourceResult};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

const RECORD_FILE_EXTENSION: &str = "json";

/// Reads one author record per JSON file from a single directory.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_files(&self) -> SourceResult<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(SourceError::MissingDirectory(self.dir.clone()));
        }

        let entries = std::fs::read_dir(&self.dir).map_err(|source| SourceError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SourceError::Io {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            let is_record = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == RECORD_FILE_EXTENSION);
            if is_record {
                files.push(path);
            }
        }
        files.sort_by(|left, right| left.file_name().cmp(&right.file_name()));
        Ok(files)
    }
}

impl RecordSource for JsonDirSource {
    fn records(&self) -> SourceResult<Vec<SourceRecord>> {
        let started_at = Instant::now();
        let files = self.record_files()?;
        let mut records = Vec::with_capacity(files.len());

        for path in &files {
            let origin = origin_label(path);
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    warn!(
                        "event=record_skip module=source origin={} reason=read_failed error={}",
                        origin, err
                    );
                    continue;
                }
            };
            match serde_json::from_str(&text) {
                Ok(value) => records.push(SourceRecord::new(origin, value)),
                Err(err) => {
                    warn!(
                        "event=record_skip module=source origin={} reason=invalid_json error={}",
                        origin, err
                    );
                }
            }
        }

        info!(
            "event=source_scan module=source status=ok dir={} files={} records={} duration_ms={}",
            self.dir.display(),
            files.len(),
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(records)
    }
}

fn origin_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::JsonDirSource;
    use crate::source::{RecordSource, SourceError};

    #[test]
    fn missing_directory_is_an_error() {
        let source = JsonDirSource::new("/definitely/not/a/kavisrc");
        let err = source.records().unwrap_err();
        assert!(matches!(err, SourceError::MissingDirectory(_)));
        assert!(err.to_string().contains("data directory not found"));
    }

    #[test]
    fn only_json_files_are_read_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"n": 2}"#).unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"n": 1}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let records = JsonDirSource::new(dir.path()).records().unwrap();
        let origins = records
            .iter()
            .map(|record| record.origin.as_str())
            .collect::<Vec<_>>();
        assert_eq!(origins, ["a.json", "b.json"]);
        assert_eq!(records[0].value["n"], 1);
    }

    #[test]
    fn invalid_json_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("ok.json"), "{}").unwrap();

        let records = JsonDirSource::new(dir.path()).records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].origin, "ok.json");
    }
}
