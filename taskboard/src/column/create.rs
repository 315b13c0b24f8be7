//! CreateColumn command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, Column, ColumnId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Append a new column to a board
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateColumn {
    /// The owning board
    pub board_id: BoardId,
    /// The column title
    pub title: String,
    /// Display color; defaults to a neutral gray
    pub color: Option<String>,
}

operation!(
    CreateColumn,
    verb = "create",
    noun = "column",
    description = "Append a new column to a board"
);

impl CreateColumn {
    /// Create a new CreateColumn command
    pub fn new(board_id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            title: title.into(),
            color: None,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Execute<AppState, BoardError> for CreateColumn {
    type Output = ColumnId;

    fn execute(&self, state: &mut AppState) -> Result<ColumnId> {
        let board = state.board_mut(&self.board_id)?;

        let mut column = Column::new(board.id.clone(), &self.title, board.columns.len());
        if let Some(color) = &self.color {
            column = column.with_color(color);
        }

        let id = column.id.clone();
        board.columns.push(column);
        board.touch();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::types::DEFAULT_COLUMN_COLOR;

    fn setup() -> (AppState, BoardId) {
        let mut state = AppState::default();
        let id = CreateBoard::new("Test").execute(&mut state).unwrap();
        (state, id)
    }

    #[test]
    fn test_create_column_appends() {
        let (mut state, board_id) = setup();

        let a = CreateColumn::new(&board_id, "A").execute(&mut state).unwrap();
        let b = CreateColumn::new(&board_id, "B")
            .with_color("#f59e0b")
            .execute(&mut state)
            .unwrap();

        let board = state.board(&board_id).unwrap();
        let first = board.column(&a).unwrap();
        let second = board.column(&b).unwrap();
        assert_eq!(first.position, 0);
        assert_eq!(first.color, DEFAULT_COLUMN_COLOR);
        assert_eq!(second.position, 1);
        assert_eq!(second.color, "#f59e0b");
        assert_eq!(second.board_id, board_id);
        assert!(second.card_ids.is_empty());
        assert!(second.wip_limit.is_none());
    }

    #[test]
    fn test_create_column_unknown_board() {
        let (mut state, _) = setup();
        let before = state.clone();

        let result = CreateColumn::new("missing", "A").execute(&mut state);

        assert!(matches!(result, Err(BoardError::BoardNotFound { .. })));
        assert_eq!(state, before);
    }
}
