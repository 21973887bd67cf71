use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use utoipa::ToSchema;

/// Name of the built-in column holding each player's display name.
pub const PLAYER_NAME_COLUMN: &str = "Player Name";
/// Name of the built-in column holding each player's score for the current game.
pub const RESULT_SCORE_COLUMN: &str = "Result Score";
/// Language used when the document does not specify one.
pub const DEFAULT_LANG: &str = "en";

/// Cumulative score per player name across finished games, in insertion order.
///
/// Scores keep their JSON representation so whole numbers stay whole.
pub type Leaderboard = IndexMap<String, Number>;

/// The single persisted document holding all scoreboard state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Scoreboard {
    /// Ordered column definitions; `players[*].data[i]` maps to `columns[i]`.
    #[serde(default = "default_columns")]
    pub columns: Vec<Column>,
    /// Players of the game currently being scored.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Finished-game records, appended verbatim.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub history: Vec<Value>,
    /// Cumulative score per player name.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub leaderboard: Leaderboard,
    /// UI theme.
    #[serde(default)]
    #[schema(value_type = String)]
    pub theme: Theme,
    /// UI language code.
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            players: Vec::new(),
            history: Vec::new(),
            leaderboard: Leaderboard::new(),
            theme: Theme::Light,
            lang: default_lang(),
        }
    }
}

/// Named, typed field definition applied positionally across all players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Column {
    /// Header shown in the score table.
    pub name: String,
    /// Kind of input rendered for the column.
    #[serde(rename = "type", default)]
    #[schema(value_type = String)]
    pub column_type: ColumnType,
    /// Whether the front-end requires a value in this column.
    #[serde(default)]
    pub required: bool,
    /// Choices offered by dropdown columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Keys a client stored on the column that the server does not interpret.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl Column {
    /// Construct a column without dropdown options.
    pub fn new(name: impl Into<String>, column_type: ColumnType, required: bool) -> Self {
        Self {
            name: name.into(),
            column_type,
            required,
            options: None,
            extra: Map::new(),
        }
    }
}

/// Input kind of a column. Unknown kinds are kept as-is so they survive a save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    /// Free-form text.
    #[default]
    Text,
    /// Numeric value.
    Number,
    /// One of the column's `options`.
    Dropdown,
    /// Any other kind understood by a client.
    Other(String),
}

impl From<String> for ColumnType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "text" => ColumnType::Text,
            "number" => ColumnType::Number,
            "dropdown" => ColumnType::Dropdown,
            _ => ColumnType::Other(value),
        }
    }
}

impl From<ColumnType> for String {
    fn from(value: ColumnType) -> Self {
        match value {
            ColumnType::Text => "text".into(),
            ColumnType::Number => "number".into(),
            ColumnType::Dropdown => "dropdown".into(),
            ColumnType::Other(other) => other,
        }
    }
}

/// A participant of the current game with one value per column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    /// Optional display name; the front-end usually keeps it in the "Player Name" column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cell values, positionally aligned with the document columns.
    #[serde(default)]
    pub data: Vec<String>,
    /// Keys a client stored on the player that the server does not interpret.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// UI theme. Unknown themes are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
    /// Any other theme name.
    Other(String),
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        match value.as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::Other(value),
        }
    }
}

impl From<Theme> for String {
    fn from(value: Theme) -> Self {
        match value {
            Theme::Light => "light".into(),
            Theme::Dark => "dark".into(),
            Theme::Other(other) => other,
        }
    }
}

fn default_columns() -> Vec<Column> {
    vec![
        Column::new(PLAYER_NAME_COLUMN, ColumnType::Text, true),
        Column::new(RESULT_SCORE_COLUMN, ColumnType::Number, true),
    ]
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_document_matches_persisted_layout() {
        let value = serde_json::to_value(Scoreboard::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "columns": [
                    {"name": "Player Name", "type": "text", "required": true},
                    {"name": "Result Score", "type": "number", "required": true}
                ],
                "players": [],
                "history": [],
                "leaderboard": {},
                "theme": "light",
                "lang": "en"
            })
        );
    }

    #[test]
    fn unknown_column_type_and_theme_survive_reserialization() {
        let raw = json!({
            "columns": [{"name": "Rating", "type": "stars", "required": false}],
            "players": [{"data": ["5"]}],
            "history": [],
            "leaderboard": {},
            "theme": "solarized",
            "lang": "zh"
        });
        let doc: Scoreboard = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(doc.columns[0].column_type, ColumnType::Other("stars".into()));
        assert_eq!(doc.theme, Theme::Other("solarized".into()));
        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
    }

    #[test]
    fn dropdown_options_round_trip() {
        let raw = json!({
            "name": "Faction",
            "type": "dropdown",
            "required": false,
            "options": ["Red", "Blue"]
        });
        let column: Column = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(column.column_type, ColumnType::Dropdown);
        assert_eq!(
            column.options,
            Some(vec!["Red".to_string(), "Blue".to_string()])
        );
        assert_eq!(serde_json::to_value(&column).unwrap(), raw);
    }

    #[test]
    fn unknown_player_and_column_keys_are_kept() {
        let raw = json!({
            "columns": [{"name": "Faction", "type": "text", "required": false, "width": 120}],
            "players": [{"data": ["Red"], "color": "red", "meta": {"seat": 2}}],
            "history": [],
            "leaderboard": {"Alice": 5, "Bob": 2.5},
            "theme": "light",
            "lang": "en"
        });

        let doc: Scoreboard = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(doc.players[0].extra["color"], "red");
        assert_eq!(doc.columns[0].extra["width"], 120);
        assert_eq!(serde_json::to_value(&doc).unwrap(), raw);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let doc: Scoreboard = serde_json::from_value(json!({"players": []})).unwrap();
        assert_eq!(doc, Scoreboard::default());
    }
}
