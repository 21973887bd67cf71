use axum::{Json, Router, extract::State, routing::put};
use validator::Validate;

use crate::{
    dto::{
        extract::ApiJson,
        scoreboard::{MutationResponse, SettingsUpdateRequest},
    },
    error::AppError,
    services::scoreboard_service,
    state::SharedState,
};

/// Route updating the theme and language.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/settings", put(update_settings))
}

/// Change whichever of `theme` and `lang` is present.
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = "settings",
    request_body = SettingsUpdateRequest,
    responses(
        (status = 200, description = "Settings updated", body = MutationResponse),
        (status = 400, description = "Malformed language code")
    )
)]
pub async fn update_settings(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<SettingsUpdateRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    request.validate()?;
    let data = scoreboard_service::update_settings(&state, request).await?;
    Ok(Json(MutationResponse::ok(data)))
}
