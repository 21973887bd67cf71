use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::{
        extract::ApiJson,
        scoreboard::{FinishGameRequest, MutationResponse},
    },
    error::AppError,
    services::scoreboard_service,
    state::SharedState,
};

/// Routes closing or resetting games.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/game/finish", post(finish_game))
        .route("/api/game/clear", post(clear_current_game))
        .route("/api/all/clear", post(clear_all))
}

/// Archive the current game and add its scores to the leaderboard.
#[utoipa::path(
    post,
    path = "/api/game/finish",
    tag = "game",
    request_body = FinishGameRequest,
    responses((status = 200, description = "Game recorded", body = MutationResponse))
)]
pub async fn finish_game(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<FinishGameRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let data = scoreboard_service::finish_game(&state, request).await?;
    Ok(Json(MutationResponse::ok(data)))
}

/// Drop the current players without touching history or leaderboard.
#[utoipa::path(
    post,
    path = "/api/game/clear",
    tag = "game",
    responses((status = 200, description = "Current game cleared", body = MutationResponse))
)]
pub async fn clear_current_game(
    State(state): State<SharedState>,
) -> Result<Json<MutationResponse>, AppError> {
    let data = scoreboard_service::clear_current_game(&state).await?;
    Ok(Json(MutationResponse::ok(data)))
}

/// Reset the whole document, history and leaderboard included.
#[utoipa::path(
    post,
    path = "/api/all/clear",
    tag = "game",
    responses((status = 200, description = "All data cleared", body = MutationResponse))
)]
pub async fn clear_all(
    State(state): State<SharedState>,
) -> Result<Json<MutationResponse>, AppError> {
    let data = scoreboard_service::clear_all(&state).await?;
    Ok(Json(MutationResponse::ok(data)))
}
