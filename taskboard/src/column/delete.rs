//! DeleteColumn command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, ColumnId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Delete a column and every card in it
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The owning board
    pub board_id: BoardId,
    /// The column ID to delete
    pub id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column and the cards it contains"
);

impl DeleteColumn {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<ColumnId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
        }
    }
}

impl Execute<AppState, BoardError> for DeleteColumn {
    /// Number of cards removed with the column
    type Output = usize;

    fn execute(&self, state: &mut AppState) -> Result<usize> {
        let board = state.board_mut(&self.board_id)?;
        let index = board
            .column_index(&self.id)
            .ok_or_else(|| BoardError::ColumnNotFound {
                id: self.id.to_string(),
            })?;

        board.columns.remove(index);

        let before = board.cards.len();
        board.cards.retain(|_, card| card.column_id != self.id);
        let removed = before - board.cards.len();

        board.compact_positions();
        board.touch();

        tracing::debug!(column = %self.id, cards = removed, "deleted column");
        Ok(removed)
    }
}
