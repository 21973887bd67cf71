//! In-memory mutations applied to the scoreboard document between a load and a save.
//!
//! Every mutation that touches columns or players keeps `player.data` padded to the column
//! count it affects; data is never truncated on read. A failing mutation leaves the
//! document untouched.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::dao::models::{Column, Leaderboard, Player, Scoreboard, Theme};

/// Longest row a cell update may pad a player's data to.
pub const MAX_PLAYER_CELLS: usize = 1 << 16;

/// Reasons a document mutation can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// Player index outside `[0, players.len())`.
    #[error("Invalid player index")]
    InvalidPlayerIndex(usize),
    /// Column index outside `[0, columns.len())`.
    #[error("Invalid column index")]
    InvalidColumnIndex(usize),
    /// Padding a row up to this column would exceed [`MAX_PLAYER_CELLS`] or available memory.
    #[error("Cannot extend player data to column {0}")]
    RowTooLong(usize),
}

impl Scoreboard {
    /// Append a player as-is; neither its name nor its data length is checked.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Remove the player at `index`.
    pub fn delete_player(&mut self, index: usize) -> Result<Player, ScoreboardError> {
        if index >= self.players.len() {
            return Err(ScoreboardError::InvalidPlayerIndex(index));
        }
        Ok(self.players.remove(index))
    }

    /// Set one cell, padding the player's data with empty strings up to `column`.
    ///
    /// The column index is not range-checked against the columns; only a row that cannot
    /// be grown that far is refused.
    pub fn update_cell(
        &mut self,
        player: usize,
        column: usize,
        value: String,
    ) -> Result<(), ScoreboardError> {
        let player = self
            .players
            .get_mut(player)
            .ok_or(ScoreboardError::InvalidPlayerIndex(player))?;

        if player.data.len() <= column {
            let len = column
                .checked_add(1)
                .filter(|len| *len <= MAX_PLAYER_CELLS)
                .ok_or(ScoreboardError::RowTooLong(column))?;
            player
                .data
                .try_reserve_exact(len - player.data.len())
                .map_err(|_| ScoreboardError::RowTooLong(column))?;
            player.data.resize(len, String::new());
        }
        player.data[column] = value;
        Ok(())
    }

    /// Append a column and an empty cell for every existing player.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
        for player in &mut self.players {
            player.data.push(String::new());
        }
    }

    /// Remove the column at `index` together with each player's value at that position.
    ///
    /// Players whose data is already shorter than `index` are left untouched.
    pub fn delete_column(&mut self, index: usize) -> Result<Column, ScoreboardError> {
        if index >= self.columns.len() {
            return Err(ScoreboardError::InvalidColumnIndex(index));
        }

        let column = self.columns.remove(index);
        for player in &mut self.players {
            if index < player.data.len() {
                player.data.remove(index);
            }
        }
        Ok(column)
    }

    /// Record a finished game: append it to history, add the score deltas to the
    /// leaderboard, and clear the current players.
    pub fn finish_game(&mut self, game: Value, deltas: Leaderboard) {
        self.history.push(game);
        for (name, score) in deltas {
            let total = match self.leaderboard.get(&name) {
                Some(total) => add_scores(total, &score),
                None => score,
            };
            self.leaderboard.insert(name, total);
        }
        self.players.clear();
    }

    /// Drop the current players, keeping history and leaderboard.
    pub fn clear_current_game(&mut self) {
        self.players.clear();
    }

    /// Reset everything, including history and leaderboard, to the default document.
    pub fn clear_all(&mut self) {
        *self = Scoreboard::default();
    }

    /// Apply whichever settings are provided, leaving the others unchanged.
    pub fn update_settings(&mut self, theme: Option<Theme>, lang: Option<String>) {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(lang) = lang {
            self.lang = lang;
        }
    }
}

/// Sum two scores, staying integral when both are integers.
///
/// A float sum that is not finite leaves `total` unchanged.
fn add_scores(total: &Number, delta: &Number) -> Number {
    if let Some(sum) = total
        .as_i64()
        .zip(delta.as_i64())
        .and_then(|(a, b)| a.checked_add(b))
    {
        return sum.into();
    }
    let sum = total.as_f64().unwrap_or(0.0) + delta.as_f64().unwrap_or(0.0);
    Number::from_f64(sum).unwrap_or_else(|| total.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::models::ColumnType;
    use serde_json::json;

    fn player(cells: &[&str]) -> Player {
        Player {
            data: cells.iter().map(|cell| cell.to_string()).collect(),
            ..Player::default()
        }
    }

    fn scores(raw: Value) -> Leaderboard {
        serde_json::from_value(raw).unwrap()
    }

    fn board_with_players(players: &[&[&str]]) -> Scoreboard {
        let mut board = Scoreboard::default();
        for cells in players {
            board.add_player(player(cells));
        }
        board
    }

    fn assert_aligned(board: &Scoreboard) {
        for player in &board.players {
            assert_eq!(player.data.len(), board.columns.len(), "{player:?}");
        }
    }

    #[test]
    fn add_player_appends_without_validation() {
        let mut board = board_with_players(&[&["Alice", "3"]]);
        board.add_player(player(&["Alice"]));

        assert_eq!(board.players.len(), 2);
        assert_eq!(board.players[1].data, vec!["Alice"]);
    }

    #[test]
    fn delete_player_out_of_range_leaves_document_unchanged() {
        let mut board = board_with_players(&[&["Alice", "1"], &["Bob", "2"], &["Cara", "3"]]);
        let before = board.clone();

        assert_eq!(
            board.delete_player(5),
            Err(ScoreboardError::InvalidPlayerIndex(5))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn delete_player_removes_only_that_player() {
        let mut board = board_with_players(&[&["Alice", "1"], &["Bob", "2"], &["Cara", "3"]]);

        let removed = board.delete_player(1).unwrap();

        assert_eq!(removed.data[0], "Bob");
        let names: Vec<_> = board.players.iter().map(|p| p.data[0].as_str()).collect();
        assert_eq!(names, ["Alice", "Cara"]);
    }

    #[test]
    fn update_cell_overwrites_existing_value() {
        let mut board = board_with_players(&[&["Alice", "1"]]);

        board.update_cell(0, 1, "7".into()).unwrap();

        assert_eq!(board.players[0].data, vec!["Alice", "7"]);
    }

    #[test]
    fn update_cell_beyond_data_pads_with_empty_strings() {
        let mut board = board_with_players(&[&["Alice"]]);

        board.update_cell(0, 3, "x".into()).unwrap();

        assert_eq!(board.players[0].data, vec!["Alice", "", "", "x"]);
    }

    #[test]
    fn update_cell_rejects_unknown_player() {
        let mut board = board_with_players(&[&["Alice", "1"]]);
        let before = board.clone();

        assert_eq!(
            board.update_cell(1, 0, "x".into()),
            Err(ScoreboardError::InvalidPlayerIndex(1))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn update_cell_refuses_column_that_overflows_the_row_length() {
        let mut board = board_with_players(&[&["Alice", "1"]]);
        let before = board.clone();

        assert_eq!(
            board.update_cell(0, usize::MAX, "x".into()),
            Err(ScoreboardError::RowTooLong(usize::MAX))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn update_cell_refuses_huge_padding() {
        let mut board = board_with_players(&[&["Alice", "1"]]);
        let before = board.clone();

        assert_eq!(
            board.update_cell(0, 1 << 40, "x".into()),
            Err(ScoreboardError::RowTooLong(1 << 40))
        );
        assert_eq!(board, before);

        board.update_cell(0, MAX_PLAYER_CELLS - 1, "last".into()).unwrap();
        assert_eq!(board.players[0].data.len(), MAX_PLAYER_CELLS);
    }

    #[test]
    fn add_and_delete_columns_keep_players_aligned() {
        let mut board = board_with_players(&[&["Alice", "1"], &["Bob", "2"]]);

        board.add_column(Column::new("Faction", ColumnType::Text, false));
        assert_aligned(&board);
        board.update_cell(1, 2, "Red".into()).unwrap();

        board.add_player(player(&["Cara", "3", ""]));
        board.add_column(Column::new("Bonus", ColumnType::Number, false));
        assert_aligned(&board);

        board.delete_column(0).unwrap();
        assert_aligned(&board);
        assert_eq!(board.players[1].data, vec!["2", "Red", ""]);

        board.delete_column(2).unwrap();
        assert_aligned(&board);
        assert_eq!(board.columns.len(), 2);
    }

    #[test]
    fn deleting_a_column_loses_its_data() {
        let mut board = board_with_players(&[&["Alice", "1"]]);
        board.add_column(Column::new("Faction", ColumnType::Text, false));
        board.update_cell(0, 2, "Red".into()).unwrap();

        board.delete_column(2).unwrap();
        board.add_column(Column::new("Faction", ColumnType::Text, false));

        assert_eq!(board.players[0].data, vec!["Alice", "1", ""]);
    }

    #[test]
    fn delete_column_skips_players_with_short_data() {
        let mut board = board_with_players(&[&["Alice"], &["Bob", "2"]]);

        board.delete_column(1).unwrap();

        assert_eq!(board.players[0].data, vec!["Alice"]);
        assert_eq!(board.players[1].data, vec!["Bob"]);
    }

    #[test]
    fn delete_column_out_of_range_is_rejected() {
        let mut board = board_with_players(&[&["Alice", "1"]]);
        let before = board.clone();

        assert_eq!(
            board.delete_column(2),
            Err(ScoreboardError::InvalidColumnIndex(2))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn finish_game_merges_leaderboard_additively() {
        let mut board = Scoreboard::default();
        let deltas = scores(json!({"Alice": 5}));

        board.finish_game(json!({"winner": "Alice"}), deltas.clone());
        assert_eq!(board.leaderboard, deltas);

        board.finish_game(json!({"winner": "Alice"}), deltas);
        assert_eq!(
            serde_json::to_value(&board.leaderboard).unwrap(),
            json!({"Alice": 10})
        );
        assert_eq!(board.history.len(), 2);
    }

    #[test]
    fn finish_game_always_clears_players() {
        let mut board = board_with_players(&[&["Alice", "4"], &["Bob", "9"]]);
        board.leaderboard.insert("Bob".into(), Number::from(1));

        board.finish_game(
            json!({"players": ["Alice", "Bob"], "winner": "Bob"}),
            scores(json!({"Alice": 4, "Bob": 9})),
        );

        assert!(board.players.is_empty());
        assert_eq!(
            serde_json::to_value(&board.leaderboard).unwrap(),
            json!({"Bob": 10, "Alice": 4})
        );
        assert_eq!(board.history[0]["winner"], "Bob");
    }

    #[test]
    fn leaderboard_totals_stay_integral_until_a_fraction_appears() {
        let mut board = Scoreboard::default();

        board.finish_game(json!({}), scores(json!({"Alice": 3, "Bob": 2})));
        board.finish_game(json!({}), scores(json!({"Alice": 2, "Bob": 0.5})));

        assert_eq!(
            serde_json::to_value(&board.leaderboard).unwrap(),
            json!({"Alice": 5, "Bob": 2.5})
        );
    }

    #[test]
    fn clear_current_game_keeps_history_and_leaderboard() {
        let mut board = board_with_players(&[&["Alice", "4"]]);
        board.finish_game(json!({}), scores(json!({"Alice": 4})));
        board.add_player(player(&["Bob", "1"]));

        board.clear_current_game();

        assert!(board.players.is_empty());
        assert_eq!(board.history.len(), 1);
        assert_eq!(board.leaderboard.len(), 1);
    }

    #[test]
    fn clear_all_restores_default_document() {
        let mut board = board_with_players(&[&["Alice", "4"]]);
        board.add_column(Column::new("Faction", ColumnType::Text, false));
        board.finish_game(json!({}), scores(json!({"Alice": 4})));
        board.update_settings(Some(Theme::Dark), Some("zh".into()));

        board.clear_all();

        assert_eq!(board, Scoreboard::default());
        assert_eq!(board.columns.len(), 2);
    }

    #[test]
    fn update_settings_only_touches_provided_fields() {
        let mut board = Scoreboard::default();
        board.update_settings(None, Some("zh".into()));

        board.update_settings(Some(Theme::Dark), None);

        assert_eq!(board.theme, Theme::Dark);
        assert_eq!(board.lang, "zh");
    }
}
