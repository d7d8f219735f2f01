//! Core library for the TamilKavi poetry browser.
//!
//! Loads a fixed corpus of authors, books and poems once per process and
//! answers exact-match queries over it. Front ends talk to [`Library`].

pub mod config;
pub mod index;
pub mod logging;
pub mod model;
pub mod service;
pub mod source;

pub use config::{ConfigError, KaviConfig};
pub use index::corpus::{Corpus, IndexError, Placement};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::author::Author;
pub use model::book::Book;
pub use model::poem::Poem;
pub use model::record::{RecordError, RecordResult};
pub use service::library::{Library, QueryError, QueryResult};
pub use source::{
    load_authors, JsonDirSource, RecordSource, SourceError, SourceRecord, SourceResult,
    StaticSource,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
