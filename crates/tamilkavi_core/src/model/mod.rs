//! Entity model for the poetry corpus.
//!
//! # Responsibility
//! - Define the owned Author → Book → Poem graph.
//! - Build that graph from raw JSON records, failing on malformed input.
//!
//! # Invariants
//! - Entities are read-only after construction; there are no mutators.
//! - Child order always equals source record order.

pub mod author;
pub mod book;
pub mod poem;
pub mod record;
