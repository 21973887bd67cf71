use std::path::PathBuf;

use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by document stores when persisting the scoreboard.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The document could not be encoded as JSON.
    #[error("failed to serialize scoreboard document")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    /// Writing the document (or creating its directory) failed.
    #[error("failed to write scoreboard document to `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
