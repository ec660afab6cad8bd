use std::sync::RwLock;

use crate::document::Document;
use crate::error::StoreResult;
use crate::traits::DocumentStore;

/// In-memory document store.
///
/// Intended for tests and embedding. Same locking contract as
/// [`crate::FileStore`], no persistence. The document is cloned on read.
#[derive(Default)]
pub struct InMemoryStore {
    doc: RwLock<Document>,
}

impl InMemoryStore {
    /// Create a store holding the empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with `doc`.
    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: RwLock::new(doc),
        }
    }
}

impl DocumentStore for InMemoryStore {
    fn read(&self) -> StoreResult<Document> {
        Ok(self.doc.read().expect("lock poisoned").clone())
    }

    fn replace(&self, doc: &Document) -> StoreResult<()> {
        *self.doc.write().expect("lock poisoned") = doc.clone();
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keys = self.doc.read().expect("lock poisoned").len();
        f.debug_struct("InMemoryStore").field("keys", &keys).finish()
    }
}
