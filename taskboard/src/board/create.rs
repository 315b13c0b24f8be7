//! CreateBoard command

use crate::error::{BoardError, Result};
use crate::types::{AppState, Board, BoardId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Create a new, empty board and make it the current board
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateBoard {
    /// The board title
    pub title: String,
    /// Optional board description
    pub description: Option<String>,
}

operation!(
    CreateBoard,
    verb = "create",
    noun = "board",
    description = "Create a new board and select it"
);

impl CreateBoard {
    /// Create a new CreateBoard command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Execute<AppState, BoardError> for CreateBoard {
    type Output = BoardId;

    fn execute(&self, state: &mut AppState) -> Result<BoardId> {
        let mut board = Board::new(&self.title);
        board.description = self.description.clone();

        let id = board.id.clone();
        state.insert_board(board);
        state.current_board_id = Some(id.clone());

        tracing::info!(board = %id, title = %self.title, "created board");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_operations::Operation;

    #[test]
    fn test_create_board() {
        let mut state = AppState::default();

        let id = CreateBoard::new("Test Board")
            .with_description("A test board")
            .execute(&mut state)
            .unwrap();

        let board = state.board(&id).unwrap();
        assert_eq!(board.title, "Test Board");
        assert_eq!(board.description.as_deref(), Some("A test board"));
        assert!(board.columns.is_empty());
        assert!(board.cards.is_empty());
        assert!(board.labels.is_empty());
        assert!(board.users.is_empty());
        assert_eq!(state.current_board_id, Some(id));
    }

    #[test]
    fn test_create_board_selects_newest() {
        let mut state = AppState::default();
        CreateBoard::new("First").execute(&mut state).unwrap();
        let second = CreateBoard::new("Second").execute(&mut state).unwrap();
        assert_eq!(state.boards.len(), 2);
        assert_eq!(state.current_board_id, Some(second));
    }

    #[test]
    fn test_operation_metadata() {
        let op = CreateBoard::new("test");
        assert_eq!(op.verb(), "create");
        assert_eq!(op.noun(), "board");
        assert_eq!(op.op_string(), "create board");
        assert_eq!(op.description(), "Create a new board and select it");
    }
}
