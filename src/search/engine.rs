use crate::storage::memory::DocumentStore;
use crate::storage::types::Document;
use std::sync::Arc;

/// Runs a search against the store's current snapshot.
pub async fn search(query: &str, limit: usize, store: Arc<DocumentStore>) -> Vec<Document> {
    let snapshot = store.snapshot().await;

    select_documents(&snapshot, query, limit)
        .into_iter()
        .cloned()
        .collect()
}

/// Case-insensitive substring match over `title` and `content`.
///
/// Matches keep corpus order. When nothing matches, the whole corpus stands in
/// for the match set, so a non-empty corpus never yields an empty result. An
/// empty corpus always yields an empty result.
pub fn select_documents<'a>(docs: &'a [Document], query: &str, limit: usize) -> Vec<&'a Document> {
    if docs.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    let mut matches: Vec<&Document> = docs
        .iter()
        .filter(|doc| doc.contains_lowercase(&needle))
        .collect();

    if matches.is_empty() {
        tracing::debug!("No match for {:?}, falling back to full corpus", query);
        matches = docs.iter().collect();
    }

    matches.truncate(limit);
    matches
}
