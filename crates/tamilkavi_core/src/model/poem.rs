//! Poem (kavithai) entity.

use super::record::{decode, RecordResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// A single poem: its title, text and explanatory gloss.
///
/// Equality is structural. Two equal poems from different books are still
/// different corpus entries; use the global index to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Poem {
    title: String,
    line: String,
    meaning: String,
}

impl Poem {
    pub fn new(
        title: impl Into<String>,
        line: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            line: line.into(),
            meaning: meaning.into(),
        }
    }

    /// Builds a poem from one `{ title, line, meaning }` record.
    ///
    /// Keys other than those three are rejected.
    pub fn from_record(value: &Value) -> RecordResult<Self> {
        decode(value)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Poem text.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }
}

impl Display for Poem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}\nLine: {}\nMeaning: {}",
            self.title, self.line, self.meaning
        )
    }
}
