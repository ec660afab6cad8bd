use crate::document::Document;
use crate::error::StoreResult;

/// Locked access to a single JSON document.
///
/// All implementations must satisfy these invariants:
/// - `read` takes the shared side of the lock: any number of concurrent
///   reads may proceed together.
/// - `replace` takes the exclusive side: it excludes every concurrent
///   `read` and `replace` until it completes.
/// - The lock is released on every exit path, success or error.
/// - No fairness or priority between readers and writers is guaranteed
///   beyond what the underlying lock primitive provides.
/// - All I/O errors are propagated, never silently ignored.
pub trait DocumentStore: Send + Sync {
    /// Return a snapshot of the current document.
    fn read(&self) -> StoreResult<Document>;

    /// Overwrite the document in full. There is no merge or partial update.
    fn replace(&self, doc: &Document) -> StoreResult<()>;
}
