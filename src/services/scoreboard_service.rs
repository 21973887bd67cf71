//! Business logic powering the scoreboard routes. Each operation loads the whole document,
//! applies one in-memory mutation, and saves the whole document back. There is no locking
//! between requests: concurrent writers race and the last save wins.

use tracing::{debug, warn};

use crate::{
    dao::models::{Column, Player, Scoreboard},
    dto::scoreboard::{CellUpdateRequest, FinishGameRequest, SettingsUpdateRequest},
    error::ServiceError,
    state::{SharedState, scoreboard::ScoreboardError},
};

/// Save `document`, logging and translating a storage failure.
async fn persist(state: &SharedState, document: Scoreboard) -> Result<(), ServiceError> {
    state.store().save(document).await.map_err(|err| {
        warn!(error = %err, "failed to save scoreboard");
        ServiceError::from(err)
    })
}

/// Load, mutate, save, and return the updated document.
///
/// A rejected mutation returns before anything is written.
async fn mutate<F>(
    state: &SharedState,
    operation: &str,
    mutation: F,
) -> Result<Scoreboard, ServiceError>
where
    F: FnOnce(&mut Scoreboard) -> Result<(), ScoreboardError>,
{
    let mut document = state.store().load().await;
    mutation(&mut document)?;
    persist(state, document.clone()).await?;
    debug!(operation, "scoreboard updated");
    Ok(document)
}

// ---------------------------------------------------------------------------
// Whole document
// ---------------------------------------------------------------------------

/// Return the current document unmodified.
pub async fn get_document(state: &SharedState) -> Scoreboard {
    state.store().load().await
}

/// Overwrite the persisted document wholesale.
pub async fn replace_document(
    state: &SharedState,
    document: Scoreboard,
) -> Result<(), ServiceError> {
    persist(state, document).await?;
    debug!(operation = "replace_document", "scoreboard updated");
    Ok(())
}

// ---------------------------------------------------------------------------
// Players & columns
// ---------------------------------------------------------------------------

pub async fn add_player(
    state: &SharedState,
    player: Player,
) -> Result<Scoreboard, ServiceError> {
    mutate(state, "add_player", |doc| {
        doc.add_player(player);
        Ok(())
    })
    .await
}

pub async fn delete_player(
    state: &SharedState,
    index: usize,
) -> Result<Scoreboard, ServiceError> {
    mutate(state, "delete_player", |doc| {
        doc.delete_player(index).map(drop)
    })
    .await
}

/// Set `players[player].data[column]`, padding the row when `column` is past its end.
pub async fn update_cell(
    state: &SharedState,
    player: usize,
    column: usize,
    request: CellUpdateRequest,
) -> Result<Scoreboard, ServiceError> {
    mutate(state, "update_cell", |doc| {
        doc.update_cell(player, column, request.value)
    })
    .await
}

pub async fn add_column(
    state: &SharedState,
    column: Column,
) -> Result<Scoreboard, ServiceError> {
    mutate(state, "add_column", |doc| {
        doc.add_column(column);
        Ok(())
    })
    .await
}

pub async fn delete_column(
    state: &SharedState,
    index: usize,
) -> Result<Scoreboard, ServiceError> {
    mutate(state, "delete_column", |doc| {
        doc.delete_column(index).map(drop)
    })
    .await
}

// ---------------------------------------------------------------------------
// Game lifecycle
// ---------------------------------------------------------------------------

/// Archive the game, add its scores to the leaderboard, and start over with no players.
pub async fn finish_game(
    state: &SharedState,
    request: FinishGameRequest,
) -> Result<Scoreboard, ServiceError> {
    mutate(state, "finish_game", |doc| {
        doc.finish_game(request.game_data, request.leaderboard);
        Ok(())
    })
    .await
}

pub async fn clear_current_game(state: &SharedState) -> Result<Scoreboard, ServiceError> {
    mutate(state, "clear_current_game", |doc| {
        doc.clear_current_game();
        Ok(())
    })
    .await
}

/// Reset to the default document, discarding history and leaderboard.
pub async fn clear_all(state: &SharedState) -> Result<Scoreboard, ServiceError> {
    mutate(state, "clear_all", |doc| {
        doc.clear_all();
        Ok(())
    })
    .await
}

pub async fn update_settings(
    state: &SharedState,
    request: SettingsUpdateRequest,
) -> Result<Scoreboard, ServiceError> {
    mutate(state, "update_settings", |doc| {
        doc.update_settings(request.theme, request.lang);
        Ok(())
    })
    .await
}
