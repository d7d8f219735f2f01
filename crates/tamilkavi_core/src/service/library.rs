//! The `Library` query façade.

use crate::index::corpus::{Corpus, IndexError, Placement};
use crate::model::author::Author;
use crate::model::book::Book;
use crate::model::poem::Poem;
use crate::source::{load_authors, RecordSource};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub type QueryResult<T> = Result<T, QueryError>;

/// Query failures. "Not found" is never an error: lookups return `None`
/// or an empty list instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The corpus could not be built at startup.
    NotLoaded,
    OutOfRange { index: i64, size: usize },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotLoaded => write!(
                f,
                "poetry data not loaded; check the data directory and the log for skipped records"
            ),
            Self::OutOfRange { index, size } => write!(
                f,
                "poem index {index} is out of range (index={index}, size={size})"
            ),
        }
    }
}

impl Error for QueryError {}

impl From<IndexError> for QueryError {
    fn from(value: IndexError) -> Self {
        match value {
            IndexError::OutOfRange { index, size } => Self::OutOfRange { index, size },
        }
    }
}

/// Load state of the process-wide corpus, decided exactly once.
#[derive(Debug, Clone)]
pub enum Library {
    Loaded(Corpus),
    NotLoaded,
}

impl Library {
    /// Loads every valid author from `source` and builds the corpus.
    ///
    /// # Side effects
    /// - Emits `corpus_load` events with counts and duration.
    /// - A failing source or zero valid authors yields `NotLoaded`.
    pub fn load<S: RecordSource + ?Sized>(source: &S) -> Self {
        let started_at = Instant::now();
        info!("event=corpus_load module=service status=start");

        let authors = match load_authors(source) {
            Ok(authors) => authors,
            Err(err) => {
                error!(
                    "event=corpus_load module=service status=error duration_ms={} error_code=source_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Self::NotLoaded;
            }
        };

        let author_count = authors.len();
        match Corpus::new(authors) {
            Some(corpus) => {
                info!(
                    "event=corpus_load module=service status=ok authors={} poems={} duration_ms={}",
                    author_count,
                    corpus.size(),
                    started_at.elapsed().as_millis()
                );
                Self::Loaded(corpus)
            }
            None => {
                warn!(
                    "event=corpus_load module=service status=error duration_ms={} error_code=no_valid_authors",
                    started_at.elapsed().as_millis()
                );
                Self::NotLoaded
            }
        }
    }

    pub fn from_corpus(corpus: Option<Corpus>) -> Self {
        corpus.map_or(Self::NotLoaded, Self::Loaded)
    }

    /// Convenience for callers that already hold typed authors.
    pub fn from_authors(authors: Vec<Author>) -> Self {
        Self::from_corpus(Corpus::new(authors))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// The loaded corpus, or `NotLoaded`.
    pub fn corpus(&self) -> QueryResult<&Corpus> {
        match self {
            Self::Loaded(corpus) => Ok(corpus),
            Self::NotLoaded => Err(QueryError::NotLoaded),
        }
    }

    pub fn size(&self) -> QueryResult<usize> {
        Ok(self.corpus()?.size())
    }

    pub fn poem_at(&self, index: i64) -> QueryResult<&Poem> {
        Ok(self.corpus()?.poem_at(index)?)
    }

    pub fn placement_at(&self, index: i64) -> QueryResult<Placement<'_>> {
        Ok(self.corpus()?.placement_at(index)?)
    }

    pub fn placements(&self) -> QueryResult<Vec<Placement<'_>>> {
        Ok(self.corpus()?.placements().collect())
    }

    pub fn poems_by_title(&self, title: &str) -> QueryResult<Vec<&Poem>> {
        Ok(self.corpus()?.poems_by_title(title))
    }

    pub fn poems_by_category(&self, category: &str) -> QueryResult<Vec<&Poem>> {
        Ok(self.corpus()?.poems_by_category(category))
    }

    pub fn author_by_name(&self, name: &str) -> QueryResult<Option<&Author>> {
        Ok(self.corpus()?.author_by_name(name))
    }

    pub fn book_by_title(&self, title: &str) -> QueryResult<Option<&Book>> {
        Ok(self.corpus()?.book_by_title(title))
    }

    pub fn all_authors(&self) -> QueryResult<&[Author]> {
        Ok(self.corpus()?.all_authors())
    }

    pub fn all_poems(&self) -> QueryResult<Vec<&Poem>> {
        Ok(self.corpus()?.all_poems())
    }

    pub fn all_titles(&self) -> QueryResult<Vec<&str>> {
        Ok(self.corpus()?.all_titles())
    }

    pub fn all_categories(&self) -> QueryResult<Vec<&str>> {
        Ok(self.corpus()?.all_categories())
    }

    pub fn all_author_names(&self) -> QueryResult<Vec<&str>> {
        Ok(self.corpus()?.all_author_names())
    }

    pub fn all_book_titles(&self) -> QueryResult<Vec<&str>> {
        Ok(self.corpus()?.all_book_titles())
    }
}

#[cfg(test)]
mod tests {
    use super::{Library, QueryError};
    use crate::index::corpus::IndexError;

    #[test]
    fn out_of_range_message_carries_index_and_size() {
        let err = QueryError::from(IndexError::OutOfRange { index: 2, size: 2 });
        assert_eq!(err, QueryError::OutOfRange { index: 2, size: 2 });
        assert!(err.to_string().contains("index=2, size=2"));
    }

    #[test]
    fn empty_author_list_is_not_loaded() {
        let library = Library::from_authors(Vec::new());
        assert!(!library.is_loaded());
        assert_eq!(library.size().unwrap_err(), QueryError::NotLoaded);
    }
}
