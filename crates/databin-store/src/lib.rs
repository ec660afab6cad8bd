//! File-backed storage for the databin document.
//!
//! This crate implements the one component of the service with real
//! behavioral contracts: a store holding exactly one JSON document in one
//! file on local disk, safe for concurrent callers within one process.
//!
//! # Backends
//!
//! Both implement the [`DocumentStore`] trait:
//!
//! - [`FileStore`] -- the real store: one file, one in-process `RwLock`
//! - [`InMemoryStore`] -- `RwLock<Document>` store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Every `read` loads the whole file; every `replace` overwrites it in
//!    full. There is no partial persistence.
//! 2. Many readers or one writer: the lock is the only coordination point.
//! 3. The lock is released on every exit path, success or error.
//! 4. An empty backing file reads as the empty document.
//! 5. The lock is in-process only; multi-process access is undefined.
//! 6. All I/O errors are propagated, never silently ignored.

pub mod document;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use document::Document;
pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::InMemoryStore;
pub use traits::DocumentStore;
