//! MoveCard command

use crate::error::{BoardError, Result};
use crate::types::position::insert_clamped;
use crate::types::{AppState, BoardId, CardId, ColumnId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Move a card to an index in a column.
///
/// The source and target may be the same column, in which case this is a
/// list move. A `position` past the end of the target appends.
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveCard {
    /// The owning board
    pub board_id: BoardId,
    /// The card ID to move
    pub id: CardId,
    /// The column the card is currently in
    pub source_column_id: ColumnId,
    /// The destination column
    pub target_column_id: ColumnId,
    /// Destination index within the target column
    pub position: usize,
}

operation!(
    MoveCard,
    verb = "move",
    noun = "card",
    description = "Move a card to a position in the same or another column"
);

impl MoveCard {
    pub fn new(
        board_id: impl Into<BoardId>,
        id: impl Into<CardId>,
        source_column_id: impl Into<ColumnId>,
        target_column_id: impl Into<ColumnId>,
        position: usize,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
            source_column_id: source_column_id.into(),
            target_column_id: target_column_id.into(),
            position,
        }
    }
}

impl Execute<AppState, BoardError> for MoveCard {
    /// Index the card landed at
    type Output = usize;

    fn execute(&self, state: &mut AppState) -> Result<usize> {
        let board = state.board_mut(&self.board_id)?;
        board.card(&self.id)?;
        board.column(&self.target_column_id)?;

        let source = board.column_mut(&self.source_column_id)?;
        let from = source
            .card_ids
            .iter()
            .position(|id| id == &self.id)
            .ok_or_else(|| BoardError::CardNotInColumn {
                card: self.id.to_string(),
                column: self.source_column_id.to_string(),
            })?;
        source.card_ids.remove(from);

        let target = board.column_mut(&self.target_column_id)?;
        let landed = insert_clamped(&mut target.card_ids, self.position, self.id.clone());

        let card = board.card_mut(&self.id)?;
        card.column_id = self.target_column_id.clone();
        card.touch();
        board.touch();

        tracing::debug!(
            card = %self.id,
            from = %self.source_column_id,
            to = %self.target_column_id,
            position = landed,
            "moved card"
        );
        Ok(landed)
    }
}
