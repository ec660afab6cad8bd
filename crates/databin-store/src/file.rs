use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

/// File-backed document store.
///
/// One JSON file on local disk holds the entire document. An in-process
/// `RwLock` serializes writers against each other and against readers. The
/// lock guards the file itself rather than an in-memory copy, so every read
/// round-trips through disk and can never serve a stale snapshot.
///
/// The lock is in-process only: two processes opening the same path can
/// corrupt the file.
pub struct FileStore {
    path: PathBuf,
    // Guards the backing file, not an in-memory document.
    lock: RwLock<()>,
}

impl FileStore {
    /// Open the store at `path`, creating the backing file with an empty
    /// object if it does not exist.
    ///
    /// The initial write is synchronous. An error here means there is no
    /// usable data file; callers should treat startup as failed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::info!(path = %path.display(), "data file not found, creating a new empty one");
            let bytes = Document::new()
                .to_pretty_bytes()
                .map_err(StoreError::Serialize)?;
            fs::write(&path, bytes).map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })?;
        }
        Ok(Self {
            path,
            lock: RwLock::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn read(&self) -> StoreResult<Document> {
        let _guard = self.lock.read().expect("lock poisoned");

        let content = fs::read(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        // A zero-length file is legitimate (fresh, or truncated by a crash
        // mid-write) and reads as the empty document.
        if content.is_empty() {
            return Ok(Document::new());
        }
        Document::from_slice(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn replace(&self, doc: &Document) -> StoreResult<()> {
        let _guard = self.lock.write().expect("lock poisoned");

        let bytes = doc.to_pretty_bytes().map_err(StoreError::Serialize)?;
        // Single overwrite, no temp-file-plus-rename: a crash mid-write can
        // leave a truncated file, which later reads treat as empty.
        fs::write(&self.path, bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "document saved");
        Ok(())
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore").field("path", &self.path).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn store_at(dir: &tempfile::TempDir) -> FileStore {
        FileStore::open(dir.path().join("data.json")).unwrap()
    }

    // -----------------------------------------------------------------------
    // Initialization
    // -----------------------------------------------------------------------

    #[test]
    fn open_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        assert!(!path.exists());

        let store = FileStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.read().unwrap(), Document::new());
    }

    #[test]
    fn open_initializes_with_pretty_empty_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        FileStore::open(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn open_leaves_existing_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, br#"{"kept": true}"#).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.read().unwrap().get("kept"), Some(&json!(true)));
    }

    #[test]
    fn open_fails_on_unwritable_path() {
        // Parent directory does not exist, so the initial write cannot land.
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("data.json");
        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    // -----------------------------------------------------------------------
    // Read
    // -----------------------------------------------------------------------

    #[test]
    fn empty_file_reads_as_empty_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, b"").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.read().unwrap(), Document::new());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, b"{broken").unwrap();

        let store = FileStore::open(&path).unwrap();
        let err = store.read().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let store = store_at(&dir);
        fs::remove_file(store.path()).unwrap();

        let err = store.read().unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    // -----------------------------------------------------------------------
    // Replace
    // -----------------------------------------------------------------------

    #[test]
    fn replace_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let store = store_at(&dir);

        let mut doc = Document::new();
        doc.insert("cart", json!([1, 2, 3]));
        doc.insert("nested", json!({"a": {"b": [null, false, 1.5]}}));
        store.replace(&doc).unwrap();

        assert_eq!(store.read().unwrap(), doc);
    }

    #[test]
    fn replace_overwrites_prior_content_in_full() {
        let dir = tempdir().unwrap();
        let store = store_at(&dir);

        let mut first = Document::new();
        first.insert("old", json!("state"));
        store.replace(&first).unwrap();

        let mut second = Document::new();
        second.insert("new", json!("state"));
        store.replace(&second).unwrap();

        let read = store.read().unwrap();
        assert_eq!(read, second);
        assert_eq!(read.get("old"), None);
    }

    #[test]
    fn replace_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = store_at(&dir);

        let mut doc = Document::new();
        doc.insert("k", json!([1, 2]));
        store.replace(&doc).unwrap();
        let bytes_once = fs::read(store.path()).unwrap();

        store.replace(&doc).unwrap();
        let bytes_twice = fs::read(store.path()).unwrap();

        assert_eq!(bytes_once, bytes_twice);
        assert_eq!(store.read().unwrap(), doc);
    }

    #[test]
    fn replace_persists_pretty_printed_json() {
        let dir = tempdir().unwrap();
        let store = store_at(&dir);

        let mut doc = Document::new();
        doc.insert("key", json!("value"));
        store.replace(&doc).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "{\n  \"key\": \"value\"\n}");
    }

    #[test]
    fn replace_fails_when_file_becomes_unwritable() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().join("data.json")).unwrap();

        // Turning the backing path into a directory makes the write fail.
        fs::remove_file(store.path()).unwrap();
        fs::create_dir(store.path()).unwrap();

        let err = store.replace(&Document::new()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_readers_see_the_same_document() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempdir().unwrap();
        let store = Arc::new(store_at(&dir));

        let mut doc = Document::new();
        doc.insert("shared", json!([1, 2, 3]));
        store.replace(&doc).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let expected = doc.clone();
                thread::spawn(move || {
                    assert_eq!(store.read().unwrap(), expected);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn concurrent_writers_leave_exactly_one_document() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempdir().unwrap();
        let store = Arc::new(store_at(&dir));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let mut doc = Document::new();
                    doc.insert("writer", json!(i));
                    store.replace(&doc).unwrap();
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }

        // The writes are exclusive, so the file holds one complete document
        // from one of the writers, never a torn interleaving.
        let read = store.read().unwrap();
        assert_eq!(read.len(), 1);
        let winner = read.get("writer").and_then(|v| v.as_i64()).unwrap();
        assert!((0..8).contains(&winner));
    }

    #[test]
    fn readers_interleaved_with_writers_always_parse() {
        use std::sync::Arc;
        use std::thread;

        let dir = tempdir().unwrap();
        let store = Arc::new(store_at(&dir));

        let writers: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..20 {
                        let mut doc = Document::new();
                        doc.insert("v", json!(i));
                        store.replace(&doc).unwrap();
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..20 {
                        // Every read observes a complete write: either the
                        // initial `{}` or some writer's full document.
                        let doc = store.read().unwrap();
                        assert!(doc.len() <= 1);
                    }
                })
            })
            .collect();

        for h in writers.into_iter().chain(readers) {
            h.join().expect("thread should not panic");
        }
    }
}
