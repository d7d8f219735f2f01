//! Turns raw records into validated `Author`s.

use super::{RecordSource, SourceRecord, SourceResult};
use crate::model::author::Author;
use log::warn;
use serde_json::Value;

/// Loads every valid author from `source`, in source order.
///
/// Records failing the top-level shape screen or Entity Model construction
/// are logged and skipped. Returns an empty list when nothing is valid.
///
/// # Errors
/// - Propagates source-level failures (missing directory, listing I/O).
pub fn load_authors<S: RecordSource + ?Sized>(source: &S) -> SourceResult<Vec<Author>> {
    let records = source.records()?;
    Ok(records.iter().filter_map(build_author).collect())
}

fn build_author(record: &SourceRecord) -> Option<Author> {
    if !has_author_shape(&record.value) {
        warn!(
            "event=record_skip module=source origin={} reason=invalid_structure",
            record.origin
        );
        return None;
    }

    match Author::from_record(&record.value) {
        Ok(author) => Some(author),
        Err(err) => {
            warn!(
                "event=record_skip module=source origin={} reason=malformed_record field={} error={}",
                record.origin,
                err.path(),
                err
            );
            None
        }
    }
}

/// Top-level screen: `author`, `contact` and an array-valued `books`.
fn has_author_shape(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.contains_key("author")
        && object.contains_key("contact")
        && object.get("books").is_some_and(Value::is_array)
}
