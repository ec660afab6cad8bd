use std::path::PathBuf;

/// Errors from document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file holds content that is not a valid JSON object.
    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be encoded as JSON. Should not occur for
    /// well-formed input.
    #[error("failed to encode document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The backing file could not be written (disk full, permissions).
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
