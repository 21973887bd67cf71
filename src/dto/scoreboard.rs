//! DTO definitions for the scoreboard document routes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    dao::models::{Column, ColumnType, Leaderboard, Scoreboard, Theme},
    dto::validation::validate_lang,
};

/// Acknowledgement returned when the whole document is replaced.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveResponse {
    pub success: bool,
}

impl SaveResponse {
    /// Successful save.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Result of a mutation, echoing the full updated document so clients can resynchronise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
    pub data: Scoreboard,
}

impl MutationResponse {
    /// Successful mutation that produced `data`.
    pub fn ok(data: Scoreboard) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Column definition supplied when adding a column.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ColumnInput {
    #[validate(length(min = 1, message = "column name must not be empty"))]
    pub name: String,
    #[serde(rename = "type", default)]
    #[schema(value_type = String)]
    pub column_type: ColumnType,
    #[serde(default)]
    pub required: bool,
    /// Choices for dropdown columns.
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// Any other keys, stored on the column untouched.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl From<ColumnInput> for Column {
    fn from(input: ColumnInput) -> Self {
        Self {
            name: input.name,
            column_type: input.column_type,
            required: input.required,
            options: input.options,
            extra: input.extra,
        }
    }
}

/// New value for a single player cell. A missing `value` clears the cell.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CellUpdateRequest {
    #[serde(default)]
    pub value: String,
}

/// Payload recording a finished game.
#[derive(Debug, Deserialize, ToSchema)]
pub struct FinishGameRequest {
    /// Game record appended verbatim to the history.
    #[serde(rename = "gameData")]
    #[schema(value_type = Object)]
    pub game_data: Value,
    /// Score deltas added to the cumulative leaderboard.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub leaderboard: Leaderboard,
}

/// Partial settings update: only the provided keys change.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SettingsUpdateRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl Validate for SettingsUpdateRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(ref lang) = self.lang {
            if let Err(e) = validate_lang(lang) {
                errors.add("lang", e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
