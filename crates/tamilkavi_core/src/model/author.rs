//! Author entity and the top-level record constructor.

use super::book::Book;
use super::poem::Poem;
use super::record::{decode, RecordResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// A poet and the books they own.
///
/// Extra top-level keys in an author record are ignored; only the nested
/// book and poem records are closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "author")]
    name: String,
    contact: String,
    books: Vec<Book>,
}

impl Author {
    pub fn new(name: impl Into<String>, contact: impl Into<String>, books: Vec<Book>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            books,
        }
    }

    /// Builds the full author graph from one raw author record.
    ///
    /// # Errors
    /// - `RecordError` when a required key at any depth is absent, holds the
    ///   wrong JSON type, or a book/poem record carries an unknown key.
    pub fn from_record(value: &Value) -> RecordResult<Self> {
        decode(value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// First of this author's books with exactly this title.
    pub fn book_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title() == title)
    }

    pub fn poems_by_title(&self, title: &str) -> Vec<&Poem> {
        self.books
            .iter()
            .flat_map(|book| book.poems_by_title(title))
            .collect()
    }

    /// Every poem from this author's books whose category matches.
    pub fn poems_by_category(&self, category: &str) -> Vec<&Poem> {
        self.books
            .iter()
            .filter(|book| book.category() == category)
            .flat_map(|book| book.poems())
            .collect()
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Author: {}\nContact: {}\nBooks: {}",
            self.name,
            self.contact,
            self.books.len()
        )
    }
}
