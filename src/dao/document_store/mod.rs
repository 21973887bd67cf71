mod json_file;

pub use json_file::JsonFileStore;

use crate::dao::{models::Scoreboard, storage::StorageResult};
use futures::future::BoxFuture;

/// Abstraction over the persistence of the scoreboard document.
///
/// Every request loads the whole document and, when it mutates it, saves the whole
/// document back. Implementations do not coordinate concurrent writers: the last save wins.
pub trait DocumentStore: Send + Sync {
    /// Load the persisted document, substituting [`Scoreboard::default`] when it is
    /// missing or unreadable.
    fn load(&self) -> BoxFuture<'static, Scoreboard>;
    /// Overwrite the persisted document wholesale.
    fn save(&self, document: Scoreboard) -> BoxFuture<'static, StorageResult<()>>;
}
