/// Persistence of the scoreboard document.
pub mod document_store;
/// Persisted document model.
pub mod models;
/// Storage error types shared by document stores.
pub mod storage;
/// Client for the external text-generation endpoint.
pub mod text_generation;
