use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the scoreboard backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::data::get_data,
        crate::routes::data::replace_data,
        crate::routes::players::add_player,
        crate::routes::players::delete_player,
        crate::routes::players::update_cell,
        crate::routes::columns::add_column,
        crate::routes::columns::delete_column,
        crate::routes::game::finish_game,
        crate::routes::game::clear_current_game,
        crate::routes::game::clear_all,
        crate::routes::settings::update_settings,
        crate::routes::analysis::analyze,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dao::models::Scoreboard,
            crate::dao::models::Column,
            crate::dao::models::Player,
            crate::dto::scoreboard::SaveResponse,
            crate::dto::scoreboard::MutationResponse,
            crate::dto::scoreboard::ColumnInput,
            crate::dto::scoreboard::CellUpdateRequest,
            crate::dto::scoreboard::FinishGameRequest,
            crate::dto::scoreboard::SettingsUpdateRequest,
            crate::dto::analysis::AnalyzeRequest,
            crate::dto::analysis::PlayerSummary,
            crate::dto::analysis::AnalysisResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scoreboard", description = "Whole-document read and replace"),
        (name = "players", description = "Players of the current game"),
        (name = "columns", description = "Scoring columns"),
        (name = "game", description = "Finishing and clearing games"),
        (name = "settings", description = "Theme and language"),
        (name = "analysis", description = "Natural-language commentary on the standings"),
    )
)]
pub struct ApiDoc;
