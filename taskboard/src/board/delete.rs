//! DeleteBoard command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Delete a board together with everything it owns
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteBoard {
    /// The board ID to delete
    pub id: BoardId,
}

operation!(
    DeleteBoard,
    verb = "delete",
    noun = "board",
    description = "Delete a board and all of its columns, cards, labels and users"
);

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<AppState, BoardError> for DeleteBoard {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        if state.boards.shift_remove(&self.id).is_none() {
            return Err(BoardError::BoardNotFound {
                id: self.id.to_string(),
            });
        }

        // Fall back to the first remaining board in insertion order
        if state.current_board_id.as_ref() == Some(&self.id) {
            state.current_board_id = state.boards.keys().next().cloned();
        }

        tracing::info!(board = %self.id, "deleted board");
        Ok(())
    }
}
