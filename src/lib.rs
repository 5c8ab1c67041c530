//! BO7 Knowledge API
//!
//! A small HTTP service answering substring searches over a static document
//! corpus that is loaded from a JSON file once, at startup.
//!
//! ## Modules
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Load errors (kept internal) and API errors (sent to clients).
//! - **`search`**: The scan-and-fallback search plus the HTTP handlers.
//! - **`server`**: Router assembly and the listener lifecycle.
//! - **`storage`**: The JSON loader and the process-wide document snapshot.

pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod storage;
