//! DeleteUser command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, UserId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Remove a user and unassign them from every card
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteUser {
    /// The owning board
    pub board_id: BoardId,
    /// The user ID to delete
    pub id: UserId,
}

operation!(
    DeleteUser,
    verb = "delete",
    noun = "user",
    description = "Remove a user and unassign them from all cards"
);

impl DeleteUser {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<UserId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
        }
    }
}

impl Execute<AppState, BoardError> for DeleteUser {
    /// Number of cards the user was unassigned from
    type Output = usize;

    fn execute(&self, state: &mut AppState) -> Result<usize> {
        let board = state.board_mut(&self.board_id)?;
        let index = board
            .users
            .iter()
            .position(|u| u.id == self.id)
            .ok_or_else(|| BoardError::UserNotFound {
                id: self.id.to_string(),
            })?;
        board.users.remove(index);

        let mut unassigned = 0;
        for card in board.cards.values_mut() {
            let before = card.assignees.len();
            card.assignees.retain(|id| id != &self.id);
            if card.assignees.len() != before {
                card.touch();
                unassigned += 1;
            }
        }
        board.touch();

        tracing::debug!(user = %self.id, cards = unassigned, "deleted user");
        Ok(unassigned)
    }
}
