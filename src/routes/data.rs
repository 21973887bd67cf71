use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dao::models::Scoreboard,
    dto::{extract::ApiJson, scoreboard::SaveResponse},
    error::AppError,
    services::scoreboard_service,
    state::SharedState,
};

/// Routes reading or replacing the whole scoreboard document.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/data", get(get_data).post(replace_data))
}

/// Return the full scoreboard document.
#[utoipa::path(
    get,
    path = "/api/data",
    tag = "scoreboard",
    responses((status = 200, description = "Current document", body = Scoreboard))
)]
pub async fn get_data(State(state): State<SharedState>) -> Json<Scoreboard> {
    Json(scoreboard_service::get_document(&state).await)
}

/// Persist the supplied document verbatim, replacing the stored one.
#[utoipa::path(
    post,
    path = "/api/data",
    tag = "scoreboard",
    request_body = Scoreboard,
    responses(
        (status = 200, description = "Document saved", body = SaveResponse),
        (status = 500, description = "Document could not be saved")
    )
)]
pub async fn replace_data(
    State(state): State<SharedState>,
    ApiJson(document): ApiJson<Scoreboard>,
) -> Result<Json<SaveResponse>, AppError> {
    scoreboard_service::replace_document(&state, document).await?;
    Ok(Json(SaveResponse::ok()))
}
