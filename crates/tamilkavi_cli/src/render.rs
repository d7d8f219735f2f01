//! Plain-text and JSON output for CLI results.

use serde_json::json;
use tamilkavi_core::{Author, Placement};

pub fn print_list(header: &str, items: &[&str]) {
    println!("{header}");
    for item in items {
        println!("- {item}");
    }
}

pub fn print_indexed_poem(placement: &Placement<'_>) {
    println!("\n--- Kavithai {} ---", placement.index);
    println!("{}", placement.poem);
}

pub fn print_author_card(author: &Author) {
    println!("Author: {}", author.name());
    println!("Contact: {}", author.contact());
    println!("Books:");
    if author.books().is_empty() {
        println!("  No books found for this author.");
    }
    for book in author.books() {
        println!("- {} ({})", book.title(), book.category());
    }
}

pub fn print_matches(placements: &[Placement<'_>]) {
    println!("Found {} matching Kavithai(s):", placements.len());
    for placement in placements {
        println!("\n---");
        println!("{}", placement.poem);
        println!(
            "(From Book: {}, Category: {})",
            placement.book.title(),
            placement.book.category()
        );
    }
}

/// One JSON object per poem with its index and provenance.
pub fn placements_json(placements: &[Placement<'_>]) -> serde_json::Value {
    placements
        .iter()
        .map(|placement| {
            json!({
                "index": placement.index,
                "author": placement.author.name(),
                "book": placement.book.title(),
                "category": placement.book.category(),
                "poem": placement.poem,
            })
        })
        .collect()
}
