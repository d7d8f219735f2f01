//! Corpus aggregate and its read-only query operations.
//!
//! # Responsibility
//! - Flatten Author → Book → Poem into the global poem order.
//! - Answer exact-match lookups over the flattened corpus.
//!
//! # Invariants
//! - Global index `i` always names the `i`-th poem of the flattening.
//! - Name/title lookups returning one value are first-match in corpus order.

pub mod corpus;
