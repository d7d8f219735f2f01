//! In-memory corpus index.
//!
//! All lookups are linear scans. Matching is exact and case-sensitive.

use crate::model::author::Author;
use crate::model::book::Book;
use crate::model::poem::Poem;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type IndexResult<T> = Result<T, IndexError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// Global index outside `0..size`.
    OutOfRange { index: i64, size: usize },
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, size } => {
                write!(f, "poem index out of range (index={index}, size={size})")
            }
        }
    }
}

impl Error for IndexError {}

/// Position of one poem inside the owned graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    author: usize,
    book: usize,
    poem: usize,
}

/// A poem together with its global index and owners.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub index: usize,
    pub author: &'a Author,
    pub book: &'a Book,
    pub poem: &'a Poem,
}

/// Aggregate root owning every author, with the flat poem order cached.
#[derive(Debug, Clone)]
pub struct Corpus {
    authors: Vec<Author>,
    slots: Vec<Slot>,
}

impl Corpus {
    /// Builds the corpus, or `None` when there are no authors.
    ///
    /// An absent corpus is the "not loaded" state; callers must not treat it
    /// as an empty but valid corpus.
    pub fn new(authors: Vec<Author>) -> Option<Self> {
        if authors.is_empty() {
            return None;
        }

        let mut slots = Vec::new();
        for (author_idx, author) in authors.iter().enumerate() {
            for (book_idx, book) in author.books().iter().enumerate() {
                slots.extend((0..book.len()).map(|poem_idx| Slot {
                    author: author_idx,
                    book: book_idx,
                    poem: poem_idx,
                }));
            }
        }

        Some(Self { authors, slots })
    }

    /// Number of poems in the flat ordering.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Poem at global `index`.
    ///
    /// # Errors
    /// - `IndexError::OutOfRange` when `index < 0` or `index >= size()`.
    pub fn poem_at(&self, index: i64) -> IndexResult<&Poem> {
        self.placement_at(index).map(|placement| placement.poem)
    }

    /// Poem at global `index` with its author and book.
    pub fn placement_at(&self, index: i64) -> IndexResult<Placement<'_>> {
        let out_of_range = IndexError::OutOfRange {
            index,
            size: self.size(),
        };
        let position = usize::try_from(index).map_err(|_| out_of_range)?;
        let slot = self.slots.get(position).ok_or(out_of_range)?;
        Ok(self.resolve(position, *slot))
    }

    /// Every poem with its owners, in flattening order.
    pub fn placements(&self) -> impl Iterator<Item = Placement<'_>> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(move |(position, slot)| self.resolve(position, *slot))
    }

    pub fn poems_by_title(&self, title: &str) -> Vec<&Poem> {
        self.authors
            .iter()
            .flat_map(|author| author.poems_by_title(title))
            .collect()
    }

    /// Every poem of every book whose category matches, in flattening order.
    pub fn poems_by_category(&self, category: &str) -> Vec<&Poem> {
        self.authors
            .iter()
            .flat_map(|author| author.poems_by_category(category))
            .collect()
    }

    /// First author in corpus order with this exact name.
    pub fn author_by_name(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.name() == name)
    }

    /// First book across all authors with this exact title.
    pub fn book_by_title(&self, title: &str) -> Option<&Book> {
        self.authors
            .iter()
            .find_map(|author| author.book_by_title(title))
    }

    pub fn all_poems(&self) -> Vec<&Poem> {
        self.placements().map(|placement| placement.poem).collect()
    }

    pub fn all_authors(&self) -> &[Author] {
        &self.authors
    }

    /// Distinct poem titles. Order is not part of the contract.
    pub fn all_titles(&self) -> Vec<&str> {
        distinct(self.placements().map(|placement| placement.poem.title()))
    }

    /// Distinct book categories. Order is not part of the contract.
    pub fn all_categories(&self) -> Vec<&str> {
        distinct(self.books().map(Book::category))
    }

    /// Distinct author names. Order is not part of the contract.
    pub fn all_author_names(&self) -> Vec<&str> {
        distinct(self.authors.iter().map(Author::name))
    }

    /// Distinct book titles. Order is not part of the contract.
    pub fn all_book_titles(&self) -> Vec<&str> {
        distinct(self.books().map(Book::title))
    }

    fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.authors.iter().flat_map(|author| author.books())
    }

    fn resolve(&self, index: usize, slot: Slot) -> Placement<'_> {
        let author = &self.authors[slot.author];
        let book = &author.books()[slot.book];
        Placement {
            index,
            author,
            book,
            poem: &book.poems()[slot.poem],
        }
    }
}

// First-seen order keeps output stable run to run.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(*value)).collect()
}

#[cfg(test)]
mod tests {
    use super::{Corpus, IndexError};
    use crate::model::author::Author;
    use crate::model::book::Book;
    use crate::model::poem::Poem;

    fn corpus() -> Corpus {
        let first = Author::new(
            "A",
            "a@x.com",
            vec![
                Book::new("B1", "", "", "Love", vec![Poem::new("p0", "", "")]),
                Book::new("B2", "", "", "Life", vec![]),
                Book::new(
                    "B3",
                    "",
                    "",
                    "Love",
                    vec![Poem::new("p1", "", ""), Poem::new("p2", "", "")],
                ),
            ],
        );
        let second = Author::new(
            "C",
            "c@x.com",
            vec![Book::new("B4", "", "", "Life", vec![Poem::new("p3", "", "")])],
        );
        Corpus::new(vec![first, second]).unwrap()
    }

    #[test]
    fn empty_author_list_is_absent() {
        assert!(Corpus::new(Vec::new()).is_none());
    }

    #[test]
    fn flattening_skips_empty_books() {
        let corpus = corpus();
        let titles = corpus
            .all_poems()
            .iter()
            .map(|poem| poem.title())
            .collect::<Vec<_>>();
        assert_eq!(titles, ["p0", "p1", "p2", "p3"]);
    }

    #[test]
    fn placement_reports_owners() {
        let corpus = corpus();
        let placement = corpus.placement_at(2).unwrap();
        assert_eq!(placement.index, 2);
        assert_eq!(placement.author.name(), "A");
        assert_eq!(placement.book.title(), "B3");
        assert_eq!(placement.poem.title(), "p2");
    }

    #[test]
    fn negative_and_past_end_indices_are_out_of_range() {
        let corpus = corpus();
        assert_eq!(
            corpus.poem_at(-1).unwrap_err(),
            IndexError::OutOfRange { index: -1, size: 4 }
        );
        assert_eq!(
            corpus.poem_at(4).unwrap_err(),
            IndexError::OutOfRange { index: 4, size: 4 }
        );
        assert_eq!(
            IndexError::OutOfRange { index: 4, size: 4 }.to_string(),
            "poem index out of range (index=4, size=4)"
        );
    }

    #[test]
    fn distinct_sets_drop_duplicates() {
        let corpus = corpus();
        assert_eq!(corpus.all_categories(), ["Love", "Life"]);
        assert_eq!(corpus.all_book_titles(), ["B1", "B2", "B3", "B4"]);
    }
}
