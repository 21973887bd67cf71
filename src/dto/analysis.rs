use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// Current standings submitted for commentary.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// One player's standing as shown in the analysis prompt.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlayerSummary {
    pub name: String,
    /// Score echoed exactly as received (integers stay integers).
    #[schema(value_type = f64)]
    pub score: Number,
    /// Free-form extra columns, e.g. `Faction: Red, Bonus: 3`.
    #[serde(default)]
    pub details: Option<String>,
}

/// Raw text returned by the text-generation endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub analysis: String,
}
