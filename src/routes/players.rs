use axum::{
    Json, Router,
    extract::State,
    routing::{delete, post, put},
};

use crate::{
    dao::models::Player,
    dto::{
        extract::{ApiJson, ApiPath},
        scoreboard::{CellUpdateRequest, MutationResponse},
    },
    error::AppError,
    services::scoreboard_service,
    state::SharedState,
};

/// Routes managing the players of the current game.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/players", post(add_player))
        .route("/api/players/{index}", delete(delete_player))
        .route(
            "/api/players/{player_index}/{col_index}",
            put(update_cell),
        )
}

/// Append a player to the current game.
#[utoipa::path(
    post,
    path = "/api/players",
    tag = "players",
    request_body = Player,
    responses((status = 200, description = "Player added", body = MutationResponse))
)]
pub async fn add_player(
    State(state): State<SharedState>,
    ApiJson(player): ApiJson<Player>,
) -> Result<Json<MutationResponse>, AppError> {
    let data = scoreboard_service::add_player(&state, player).await?;
    Ok(Json(MutationResponse::ok(data)))
}

/// Remove the player at `index`.
#[utoipa::path(
    delete,
    path = "/api/players/{index}",
    tag = "players",
    params(("index" = usize, Path, description = "Position of the player to remove")),
    responses(
        (status = 200, description = "Player removed", body = MutationResponse),
        (status = 400, description = "Invalid player index")
    )
)]
pub async fn delete_player(
    State(state): State<SharedState>,
    ApiPath(index): ApiPath<usize>,
) -> Result<Json<MutationResponse>, AppError> {
    let data = scoreboard_service::delete_player(&state, index).await?;
    Ok(Json(MutationResponse::ok(data)))
}

/// Set one cell of a player's row, padding the row when needed.
#[utoipa::path(
    put,
    path = "/api/players/{player_index}/{col_index}",
    tag = "players",
    params(
        ("player_index" = usize, Path, description = "Position of the player"),
        ("col_index" = usize, Path, description = "Position of the column")
    ),
    request_body = CellUpdateRequest,
    responses(
        (status = 200, description = "Cell updated", body = MutationResponse),
        (status = 400, description = "Invalid player index")
    )
)]
pub async fn update_cell(
    State(state): State<SharedState>,
    ApiPath((player_index, col_index)): ApiPath<(usize, usize)>,
    ApiJson(request): ApiJson<CellUpdateRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let data = scoreboard_service::update_cell(&state, player_index, col_index, request).await?;
    Ok(Json(MutationResponse::ok(data)))
}
