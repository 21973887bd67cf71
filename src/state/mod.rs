pub mod scoreboard;

use std::sync::Arc;

use crate::dao::{document_store::DocumentStore, text_generation::TextGenerator};

pub use self::scoreboard::ScoreboardError;

/// Shared handle passed to every route.
pub type SharedState = Arc<AppState>;

/// Central application state holding the injected collaborators.
///
/// No document is cached here: each request loads the document from the store.
pub struct AppState {
    store: Arc<dyn DocumentStore>,
    text_generator: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        text_generator: Arc<dyn TextGenerator>,
    ) -> SharedState {
        Arc::new(Self {
            store,
            text_generator,
        })
    }

    /// Store persisting the scoreboard document.
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Client used to relay analysis prompts.
    pub fn text_generator(&self) -> &dyn TextGenerator {
        self.text_generator.as_ref()
    }
}
