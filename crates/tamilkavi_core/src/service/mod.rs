//! Query façade consumed by the CLI and other front ends.
//!
//! # Responsibility
//! - Own the one-time load result (`Loaded` or `NotLoaded`).
//! - Gate every query on load state, then delegate to the corpus index.
//!
//! # Invariants
//! - No façade call ever succeeds against a `NotLoaded` library.
//! - Façade calls add no filtering of their own.

pub mod library;
