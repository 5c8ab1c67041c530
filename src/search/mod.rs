//! Search Service Module
//!
//! Answers queries against the in-memory corpus held by `DocumentStore`.
//!
//! ## Overview
//! There is no index and no ranking. A query is lower-cased once and compared
//! against the lower-cased title and content of every document, in load order.
//! If nothing matches, the first `limit` documents of the whole corpus are
//! returned instead.
//!
//! ## Submodules
//! - **`engine`**: The scan, the fallback rule and truncation.
//! - **`handlers`**: Axum handlers for `GET /` and `GET /search`.
//! - **`types`**: Query parameters, their validation, and response bodies.

pub mod engine;
pub mod handlers;
pub mod types;
