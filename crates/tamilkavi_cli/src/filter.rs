//! Combined author/book/category/title filtering for the CLI.
//!
//! Filters narrow the flat poem list in a fixed order. Poems are kept or
//! dropped by global index, so equal poems in different books stay distinct.

use tamilkavi_core::{Author, Library, Placement, QueryResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub author: Option<String>,
    pub book: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.only_author()
    }

    fn only_author(&self) -> bool {
        self.book.is_none() && self.category.is_none() && self.title.is_none()
    }
}

#[derive(Debug)]
pub enum FilterOutcome<'a> {
    /// Author given alone and owns no poems: show the author card instead.
    AuthorCard(&'a Author),
    Poems(Vec<Placement<'a>>),
    /// Nothing survived; the message explains which filter emptied the list.
    Rejected(String),
}

pub fn apply<'a>(library: &'a Library, filters: &Filters) -> QueryResult<FilterOutcome<'a>> {
    let mut selected = library.placements()?;

    if let Some(name) = &filters.author {
        let Some(author) = library.author_by_name(name)? else {
            return Ok(FilterOutcome::Rejected(format!(
                "Error: Author '{name}' not found."
            )));
        };
        selected.retain(|placement| std::ptr::eq(placement.author, author));
        if selected.is_empty() && filters.only_author() {
            return Ok(FilterOutcome::AuthorCard(author));
        }
    }

    if let Some(title) = &filters.book {
        selected.retain(|placement| placement.book.title() == title);
        if selected.is_empty() {
            let message = if library.book_by_title(title)?.is_some() {
                format!(
                    "No poems found matching the book title '{title}' within the specified filters."
                )
            } else {
                format!("Error: Book '{title}' not found.")
            };
            return Ok(FilterOutcome::Rejected(message));
        }
    }

    if let Some(category) = &filters.category {
        selected.retain(|placement| placement.book.category() == category);
        if selected.is_empty() {
            return Ok(FilterOutcome::Rejected(format!(
                "No poems found matching the category '{category}' within the specified filters."
            )));
        }
    }

    if let Some(title) = &filters.title {
        selected.retain(|placement| placement.poem.title() == title);
        if selected.is_empty() {
            return Ok(FilterOutcome::Rejected(format!(
                "No poems found matching the title '{title}' within the specified filters."
            )));
        }
    }

    Ok(FilterOutcome::Poems(selected))
}
