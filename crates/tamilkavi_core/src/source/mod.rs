//! Record sources and the author loader.
//!
//! # Responsibility
//! - Supply raw author records from outside the core (files, memory).
//! - Screen top-level record shape and build `Author`s, skipping bad records.
//!
//! # Invariants
//! - A bad record never aborts loading of the remaining records.
//! - Every skipped record is reported with a `record_skip` warning.

use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_dir;
mod loader;

pub use json_dir::JsonDirSource;
pub use loader::load_authors;

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure of the record source as a whole (not of a single record).
#[derive(Debug)]
pub enum SourceError {
    MissingDirectory(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDirectory(path) => {
                write!(f, "data directory not found: {}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingDirectory(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// One raw author record plus a label describing where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    /// File name or other origin label, used only in diagnostics.
    pub origin: String,
    pub value: Value,
}

impl SourceRecord {
    pub fn new(origin: impl Into<String>, value: Value) -> Self {
        Self {
            origin: origin.into(),
            value,
        }
    }
}

/// Supplier of raw author records.
pub trait RecordSource {
    /// Returns every record the source can currently produce, in the order
    /// that defines corpus author order.
    fn records(&self) -> SourceResult<Vec<SourceRecord>>;
}

/// In-memory record source for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<SourceRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<SourceRecord>) -> Self {
        Self { records }
    }

    /// Labels each value `memory[i]`.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        let records = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| SourceRecord::new(format!("memory[{index}]"), value))
            .collect();
        Self { records }
    }
}

impl RecordSource for StaticSource {
    fn records(&self) -> SourceResult<Vec<SourceRecord>> {
        Ok(self.records.clone())
    }
}
