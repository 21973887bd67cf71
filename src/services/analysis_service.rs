//! Relay of the current standings to the external text-generation endpoint.

use tracing::{info, warn};

use crate::{
    dto::analysis::{AnalysisResponse, AnalyzeRequest, PlayerSummary},
    error::ServiceError,
    state::SharedState,
};

const PROMPT_INTRO: &str = "Analyze this board game situation and provide insights:";
const PROMPT_INSTRUCTIONS: &str = "Please provide:
1. Current ranking and score analysis
2. Performance insights for each player
3. Winning probability assessment
4. Strategic recommendations for players who are behind
5. Key observations about the game dynamics

Keep the analysis concise, practical, and engaging.";

/// Render the fixed analysis prompt enumerating each player's standing.
pub fn build_prompt(players: &[PlayerSummary]) -> String {
    let mut summary = String::from("Current Game Scores:\n");
    for player in players {
        summary.push_str(&format!("- {}: {} points", player.name, player.score));
        if let Some(details) = player.details.as_deref().filter(|d| !d.is_empty()) {
            summary.push_str(&format!(" ({details})"));
        }
        summary.push('\n');
    }

    format!("{PROMPT_INTRO}\n\n{summary}\n\n{PROMPT_INSTRUCTIONS}")
}

/// Ask the text generator for commentary on `request.players`.
///
/// The response text is returned unmodified. An empty player list is rejected before any
/// network call. No retries are attempted.
pub async fn analyze(
    state: &SharedState,
    request: AnalyzeRequest,
) -> Result<AnalysisResponse, ServiceError> {
    if request.players.is_empty() {
        return Err(ServiceError::NoPlayerData);
    }

    let prompt = build_prompt(&request.players);
    let analysis = state
        .text_generator()
        .generate(prompt)
        .await
        .map_err(|err| {
            warn!(error = %err, "analysis relay failed");
            ServiceError::from(err)
        })?;

    info!(players = request.players.len(), "analysis generated");
    Ok(AnalysisResponse { analysis })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{RecordingGenerator, state_with_generator};
    use serde_json::Number;

    fn summary(name: &str, score: Number, details: Option<&str>) -> PlayerSummary {
        PlayerSummary {
            name: name.into(),
            score,
            details: details.map(Into::into),
        }
    }

    #[test]
    fn prompt_lists_players_then_instructions() {
        let prompt = build_prompt(&[
            summary("Alice", Number::from(12), Some("Faction: Red")),
            summary("Bob", Number::from_f64(7.5).unwrap(), None),
            summary("Cara", Number::from(0), Some("")),
        ]);

        let expected = "Analyze this board game situation and provide insights:

Current Game Scores:
- Alice: 12 points (Faction: Red)
- Bob: 7.5 points
- Cara: 0 points


Please provide:
1. Current ranking and score analysis
2. Performance insights for each player
3. Winning probability assessment
4. Strategic recommendations for players who are behind
5. Key observations about the game dynamics

Keep the analysis concise, practical, and engaging.";
        assert_eq!(prompt, expected);
    }

    #[tokio::test]
    async fn empty_player_list_fails_before_any_call() {
        let generator = RecordingGenerator::replying("unused");
        let state = state_with_generator(generator.clone());

        let err = analyze(&state, AnalyzeRequest::default()).await.unwrap_err();

        assert!(matches!(err, ServiceError::NoPlayerData));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn response_text_is_returned_verbatim() {
        let generator = RecordingGenerator::replying("  Alice leads.\n");
        let state = state_with_generator(generator.clone());

        let response = analyze(
            &state,
            AnalyzeRequest {
                players: vec![summary("Alice", Number::from(3), None)],
            },
        )
        .await
        .unwrap();

        assert_eq!(response.analysis, "  Alice leads.\n");
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("- Alice: 3 points\n"));
    }
}
