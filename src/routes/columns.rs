use axum::{
    Json, Router,
    extract::State,
    routing::{delete, post},
};
use validator::Validate;

use crate::{
    dto::{
        extract::{ApiJson, ApiPath},
        scoreboard::{ColumnInput, MutationResponse},
    },
    error::AppError,
    services::scoreboard_service,
    state::SharedState,
};

/// Routes managing the scoring columns.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/columns", post(add_column))
        .route("/api/columns/{index}", delete(delete_column))
}

/// Append a column; every existing player gets an empty cell for it.
#[utoipa::path(
    post,
    path = "/api/columns",
    tag = "columns",
    request_body = ColumnInput,
    responses(
        (status = 200, description = "Column added", body = MutationResponse),
        (status = 400, description = "Column definition rejected")
    )
)]
pub async fn add_column(
    State(state): State<SharedState>,
    ApiJson(column): ApiJson<ColumnInput>,
) -> Result<Json<MutationResponse>, AppError> {
    column.validate()?;
    let data = scoreboard_service::add_column(&state, column.into()).await?;
    Ok(Json(MutationResponse::ok(data)))
}

/// Remove the column at `index` and the matching cell of every player.
#[utoipa::path(
    delete,
    path = "/api/columns/{index}",
    tag = "columns",
    params(("index" = usize, Path, description = "Position of the column to remove")),
    responses(
        (status = 200, description = "Column removed", body = MutationResponse),
        (status = 400, description = "Invalid column index")
    )
)]
pub async fn delete_column(
    State(state): State<SharedState>,
    ApiPath(index): ApiPath<usize>,
) -> Result<Json<MutationResponse>, AppError> {
    let data = scoreboard_service::delete_column(&state, index).await?;
    Ok(Json(MutationResponse::ok(data)))
}
