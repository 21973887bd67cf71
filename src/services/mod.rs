/// Relay of score summaries to the text-generation endpoint.
pub mod analysis_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Load-mutate-save operations over the scoreboard document.
pub mod scoreboard_service;
