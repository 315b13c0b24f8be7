//! DeleteLabel command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, LabelId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Delete a label and remove it from every card
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteLabel {
    /// The owning board
    pub board_id: BoardId,
    /// The label ID to delete
    pub id: LabelId,
}

operation!(
    DeleteLabel,
    verb = "delete",
    noun = "label",
    description = "Delete a label and detach it from all cards"
);

impl DeleteLabel {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<LabelId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
        }
    }
}

impl Execute<AppState, BoardError> for DeleteLabel {
    /// Number of cards the label was detached from
    type Output = usize;

    fn execute(&self, state: &mut AppState) -> Result<usize> {
        let board = state.board_mut(&self.board_id)?;
        let index = board
            .labels
            .iter()
            .position(|l| l.id == self.id)
            .ok_or_else(|| BoardError::LabelNotFound {
                id: self.id.to_string(),
            })?;
        board.labels.remove(index);

        let mut detached = 0;
        for card in board.cards.values_mut() {
            let before = card.labels.len();
            card.labels.retain(|id| id != &self.id);
            if card.labels.len() != before {
                card.touch();
                detached += 1;
            }
        }
        board.touch();

        tracing::debug!(label = %self.id, cards = detached, "deleted label");
        Ok(detached)
    }
}
