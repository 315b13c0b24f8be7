//! DeleteCard command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, CardId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Delete a card
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteCard {
    /// The owning board
    pub board_id: BoardId,
    /// The card ID to delete
    pub id: CardId,
}

operation!(
    DeleteCard,
    verb = "delete",
    noun = "card",
    description = "Delete a card from its board"
);

impl DeleteCard {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<CardId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
        }
    }
}

impl Execute<AppState, BoardError> for DeleteCard {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        let board = state.board_mut(&self.board_id)?;
        board
            .remove_card(&self.id)
            .ok_or_else(|| BoardError::CardNotFound {
                id: self.id.to_string(),
            })?;
        board.touch();

        tracing::debug!(card = %self.id, "deleted card");
        Ok(())
    }
}
