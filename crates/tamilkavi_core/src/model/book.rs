//! Book entity: an ordered, owned collection of poems.

use super::poem::Poem;
use super::record::{decode, RecordResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// A published collection of poems.
///
/// Field names on the wire follow the on-disk record schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    #[serde(rename = "booktitle")]
    title: String,
    #[serde(rename = "coverimage")]
    cover_image: String,
    description: String,
    /// Free-text genre tag. One per book, shared freely across books.
    category: String,
    #[serde(rename = "context")]
    poems: Vec<Poem>,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        cover_image: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        poems: Vec<Poem>,
    ) -> Self {
        Self {
            title: title.into(),
            cover_image: cover_image.into(),
            description: description.into(),
            category: category.into(),
            poems,
        }
    }

    /// Builds a book and one poem per entry of its `context` list, in order.
    ///
    /// Unknown keys on the book or any of its poems are rejected.
    pub fn from_record(value: &Value) -> RecordResult<Self> {
        decode(value)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cover_image(&self) -> &str {
        &self.cover_image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Poems in source order.
    pub fn poems(&self) -> &[Poem] {
        &self.poems
    }

    /// Poem at `index` within this book only.
    pub fn poem(&self, index: usize) -> Option<&Poem> {
        self.poems.get(index)
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    /// Exact, case-sensitive title match in source order.
    pub fn poems_by_title(&self, title: &str) -> Vec<&Poem> {
        self.poems
            .iter()
            .filter(|poem| poem.title() == title)
            .collect()
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Book: {} ({})\nDescription: {}\nPoems: {}",
            self.title,
            self.category,
            self.description,
            self.poems.len()
        )
    }
}
