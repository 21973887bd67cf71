use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::{
        analysis::{AnalysisResponse, AnalyzeRequest},
        extract::ApiJson,
    },
    error::AppError,
    services::analysis_service,
    state::SharedState,
};

/// Route relaying standings to the text-generation endpoint.
pub fn router() -> Router<SharedState> {
    Router::new().route("/api/analyze", post(analyze))
}

/// Produce a natural-language commentary on the submitted standings.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis text", body = AnalysisResponse),
        (status = 400, description = "No player data provided"),
        (status = 500, description = "Upstream error or network failure"),
        (status = 504, description = "Upstream timed out")
    )
)]
pub async fn analyze(
    State(state): State<SharedState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    Ok(Json(analysis_service::analyze(&state, request).await?))
}
