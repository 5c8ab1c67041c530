use super::loader::load_documents;
use super::types::Document;

use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide holder of the document snapshot.
///
/// Readers clone the inner `Arc` and release the lock immediately, so a search
/// never holds the guard while scanning. Replacing the corpus swaps the `Arc`
/// in one assignment; a reader sees either the old list or the new one, never a
/// partially built one.
pub struct DocumentStore {
    snapshot: RwLock<Arc<Vec<Document>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::with_documents(Vec::new())
    }

    pub fn with_documents(docs: Vec<Document>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(docs)),
        }
    }

    /// Loads the corpus file and installs it as the current snapshot.
    ///
    /// Returns the number of documents now held. Never fails: a missing or
    /// malformed file leaves the store empty.
    pub async fn load(&self, path: &Path) -> usize {
        let docs = load_documents(path).await;
        let count = docs.len();
        self.replace(docs).await;
        count
    }

    pub async fn replace(&self, docs: Vec<Document>) {
        let fresh = Arc::new(docs);
        *self.snapshot.write().await = fresh;
    }

    pub async fn snapshot(&self) -> Arc<Vec<Document>> {
        self.snapshot.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.snapshot.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
