//! Document Data Types
//!
//! The on-disk corpus and the `/search` response share one shape, so a single
//! struct serves both directions.

use serde::{Deserialize, Serialize};

/// A single record of the searchable corpus.
///
/// `id`, `title` and `content` are required; deserialization fails when any of
/// them is missing or not a string. The remaining fields may be absent or `null`
/// and are always written back out, as `null` when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub date: Option<String>,
    pub section: Option<String>,
    pub content: String,
    pub source: Option<String>,
}

impl Document {
    /// True when `needle` occurs in the lower-cased title or content.
    ///
    /// `needle` must already be lower-cased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}
