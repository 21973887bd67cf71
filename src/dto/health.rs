use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok").
    pub status: String,
    /// Players in the current game.
    pub players: usize,
    /// Finished games recorded in the history.
    pub games_played: usize,
}

impl HealthResponse {
    /// Create a health response summarising the loaded document.
    pub fn ok(players: usize, games_played: usize) -> Self {
        Self {
            status: "ok".to_string(),
            players,
            games_played,
        }
    }
}
