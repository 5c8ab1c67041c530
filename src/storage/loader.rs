//! Corpus Loader
//!
//! Reads the JSON corpus file. Every failure is soft: the caller always gets a
//! (possibly empty) document list and the process keeps serving.

use super::types::Document;
use crate::error::LoadError;
use std::path::Path;

/// Loads the corpus at `path`, falling back to an empty list on any error.
///
/// The load is all-or-nothing: one bad record discards the whole file.
pub async fn load_documents(path: &Path) -> Vec<Document> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!("Corpus file {} not found. Loaded 0 docs.", path.display());
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Cannot access corpus file {}: {}. Loaded 0 docs.", path.display(), e);
            return Vec::new();
        }
    }

    match read_documents(path).await {
        Ok(docs) => {
            tracing::info!("Loaded {} docs from {}", docs.len(), path.display());
            docs
        }
        Err(e) => {
            tracing::warn!(
                "Corpus file {} invalid or empty ({}). Loaded 0 docs.",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

pub async fn read_documents(path: &Path) -> Result<Vec<Document>, LoadError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_documents(&raw)
}

/// Parses a JSON array of documents.
pub fn parse_documents(raw: &str) -> Result<Vec<Document>, LoadError> {
    Ok(serde_json::from_str(raw)?)
}
