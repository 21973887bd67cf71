use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use futures::future::BoxFuture;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::dao::{
    document_store::DocumentStore,
    models::Scoreboard,
    storage::{StorageError, StorageResult},
};

/// Document store keeping the scoreboard in a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Arc<PathBuf>,
}

impl JsonFileStore {
    /// Create a store persisting to `path`. The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Location of the persisted document.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read(&self) -> Scoreboard {
        let path = self.path.as_path();
        match fs::read_to_string(path).await {
            Ok(contents) => match serde_json::from_str::<Scoreboard>(&contents) {
                Ok(document) => document,
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse scoreboard; using default document"
                    );
                    Scoreboard::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "scoreboard file not found; using default document"
                );
                Scoreboard::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read scoreboard; using default document"
                );
                Scoreboard::default()
            }
        }
    }

    async fn write(&self, document: &Scoreboard) -> StorageResult<()> {
        let path = self.path.as_path();
        let json = serde_json::to_string_pretty(document)
            .map_err(|source| StorageError::Serialize { source })?;

        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        fs::write(path, json)
            .await
            .map_err(|source| StorageError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), "scoreboard saved");
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> BoxFuture<'static, Scoreboard> {
        let store = self.clone();
        Box::pin(async move { store.read().await })
    }

    fn save(&self, document: Scoreboard) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.write(&document).await })
    }
}
