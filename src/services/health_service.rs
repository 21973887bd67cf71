use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Load the document once and report a few counters from it.
///
/// Loading never fails (a broken file yields the default document), so the status is
/// always "ok" once the server answers.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let document = state.store().load().await;
    debug!(
        players = document.players.len(),
        games = document.history.len(),
        "health probe loaded scoreboard"
    );
    HealthResponse::ok(document.players.len(), document.history.len())
}
