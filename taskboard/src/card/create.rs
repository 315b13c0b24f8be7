//! CreateCard command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, Card, CardId, ColumnId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Create a card at the bottom of a column
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCard {
    /// The owning board
    pub board_id: BoardId,
    /// The column the card starts in
    pub column_id: ColumnId,
    /// The card title
    pub title: String,
    /// Optional card description
    pub description: Option<String>,
}

operation!(
    CreateCard,
    verb = "create",
    noun = "card",
    description = "Create a card at the end of a column"
);

impl CreateCard {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
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

impl Execute<AppState, BoardError> for CreateCard {
    type Output = CardId;

    fn execute(&self, state: &mut AppState) -> Result<CardId> {
        let board = state.board_mut(&self.board_id)?;

        let mut card = Card::new(self.column_id.clone(), &self.title);
        card.description = self.description.clone();
        let id = card.id.clone();

        board.column_mut(&self.column_id)?.card_ids.push(id.clone());
        board.cards.insert(id.clone(), card);
        board.touch();

        tracing::debug!(card = %id, column = %self.column_id, "created card");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::column::CreateColumn;
    use crate::types::Priority;

    fn setup() -> (AppState, BoardId, ColumnId) {
        let mut state = AppState::default();
        let board = CreateBoard::new("Test").execute(&mut state).unwrap();
        let column = CreateColumn::new(&board, "To Do")
            .execute(&mut state)
            .unwrap();
        (state, board, column)
    }

    #[test]
    fn test_create_card_defaults() {
        let (mut state, board, column) = setup();

        let id = CreateCard::new(&board, &column, "Write docs")
            .execute(&mut state)
            .unwrap();

        let board = state.board(&board).unwrap();
        let card = board.card(&id).unwrap();
        assert_eq!(card.title, "Write docs");
        assert_eq!(card.priority, Priority::Medium);
        assert!(card.labels.is_empty());
        assert!(card.assignees.is_empty());
        assert_eq!(card.column_id, column);
        assert_eq!(card.created_at, card.updated_at);
    }

    #[test]
    fn test_create_card_appends() {
        let (mut state, board, column) = setup();

        let first = CreateCard::new(&board, &column, "First")
            .execute(&mut state)
            .unwrap();
        let second = CreateCard::new(&board, &column, "Second")
            .with_description("details")
            .execute(&mut state)
            .unwrap();

        let board = state.board(&board).unwrap();
        assert_eq!(board.column(&column).unwrap().card_ids, vec![first, second.clone()]);
        assert_eq!(
            board.card(&second).unwrap().description.as_deref(),
            Some("details")
        );
    }

    #[test]
    fn test_create_card_unknown_column() {
        let (mut state, board, _) = setup();
        let before = state.clone();

        let result = CreateCard::new(&board, "missing", "Lost").execute(&mut state);

        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
        assert_eq!(state, before);
    }
}
