//! Record decoding at the Entity Model boundary.
//!
//! # Responsibility
//! - Decode raw JSON records into the typed entity graph via serde.
//! - Report where in the record decoding failed.
//!
//! # Invariants
//! - Required fields are never defaulted.
//! - Empty strings are accepted; only presence, type and known keys are checked.

use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RecordResult<T> = Result<T, RecordError>;

/// Construction-time failure for one raw record (MalformedRecord).
#[derive(Debug)]
pub struct RecordError {
    path: String,
    source: serde_json::Error,
}

impl RecordError {
    /// Location of the failure, e.g. `books[0].context[1]` for a poem with a
    /// missing field or `books[0].category` for a mistyped one.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed record at `{}`: {}", self.path, self.source)
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for RecordError {
    fn from(value: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = match value.path().to_string() {
            root if root == "." => "<root>".to_string(),
            path => path,
        };
        Self {
            path,
            source: value.into_inner(),
        }
    }
}

pub(crate) fn decode<'a, T: Deserialize<'a>>(value: &'a Value) -> RecordResult<T> {
    Ok(serde_path_to_error::deserialize(value)?)
}

#[cfg(test)]
mod tests {
    use super::{decode, RecordResult};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Outer {
        items: Vec<Inner>,
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Inner {
        name: String,
    }

    #[test]
    fn nested_type_error_reports_field_path() {
        let value = json!({ "items": [{ "name": "a" }, { "name": 7 }] });
        let err = decode::<Outer>(&value).unwrap_err();
        assert_eq!(err.path(), "items[1].name");
        assert!(err.to_string().starts_with("malformed record at `items[1].name`"));
    }

    #[test]
    fn missing_field_reports_its_container() {
        let value = json!({ "items": [{}] });
        let err = decode::<Outer>(&value).unwrap_err();
        assert_eq!(err.path(), "items[0]");
        assert!(err.to_string().contains("missing field `name`"));
    }

    #[test]
    fn root_errors_are_labelled() {
        let result: RecordResult<Outer> = decode(&json!([1, 2]));
        assert_eq!(result.unwrap_err().path(), "<root>");
    }
}
