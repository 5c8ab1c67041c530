//! Document Storage Module
//!
//! Owns the in-memory corpus for the lifetime of the process.
//!
//! ## Core Concepts
//! - **Loading**: The corpus is read once from a JSON array on disk. Any failure
//!   (missing file, bad JSON, a record without `id`/`title`/`content`) yields an
//!   empty corpus instead of an error.
//! - **Snapshot**: `DocumentStore` hands out `Arc<Vec<Document>>` snapshots. The
//!   list itself is never mutated; replacing it is a single reference swap.

pub mod loader;
pub mod memory;
pub mod types;
