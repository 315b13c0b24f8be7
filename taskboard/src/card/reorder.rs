//! ReorderCards command

use crate::error::{BoardError, Result};
use crate::types::position::move_within;
use crate::types::{AppState, BoardId, ColumnId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Move the card at `start_index` of a column to `end_index` of the same column
#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderCards {
    /// The owning board
    pub board_id: BoardId,
    /// The column whose cards are reordered
    pub column_id: ColumnId,
    pub start_index: usize,
    pub end_index: usize,
}

operation!(
    ReorderCards,
    verb = "reorder",
    noun = "cards",
    description = "Move a card to a new index within its column"
);

impl ReorderCards {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        start_index: usize,
        end_index: usize,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            start_index,
            end_index,
        }
    }
}

impl Execute<AppState, BoardError> for ReorderCards {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        let board = state.board_mut(&self.board_id)?;
        let column = board.column_mut(&self.column_id)?;
        move_within(&mut column.card_ids, self.start_index, self.end_index)?;
        board.touch();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::card::CreateCard;
    use crate::column::CreateColumn;
    use rstest::rstest;

    fn setup() -> (AppState, BoardId, ColumnId) {
        let mut state = AppState::default();
        let board = CreateBoard::new("Test").execute(&mut state).unwrap();
        let column = CreateColumn::new(&board, "To Do")
            .execute(&mut state)
            .unwrap();
        for title in ["A", "B", "C"] {
            CreateCard::new(&board, &column, title)
                .execute(&mut state)
                .unwrap();
        }
        (state, board, column)
    }

    fn titles(state: &AppState, board: &BoardId, column: &ColumnId) -> String {
        let board = state.board(board).unwrap();
        board
            .column(column)
            .unwrap()
            .card_ids
            .iter()
            .map(|id| board.card(id).unwrap().title.as_str())
            .collect()
    }

    #[rstest]
    #[case(0, 2, "BCA")]
    #[case(2, 0, "CAB")]
    #[case(1, 1, "ABC")]
    fn test_reorder_cards(#[case] start: usize, #[case] end: usize, #[case] expected: &str) {
        let (mut state, board, column) = setup();

        ReorderCards::new(&board, &column, start, end)
            .execute(&mut state)
            .unwrap();

        assert_eq!(titles(&state, &board, &column), expected);
    }

    #[test]
    fn test_reorder_same_index_only_touches_board() {
        let (mut state, board, column) = setup();
        let before = state.board(&board).unwrap().clone();

        ReorderCards::new(&board, &column, 1, 1)
            .execute(&mut state)
            .unwrap();

        let after = state.board(&board).unwrap();
        assert_eq!(after.columns, before.columns);
        assert_eq!(after.cards, before.cards);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn test_reorder_cards_out_of_range() {
        let (mut state, board, column) = setup();
        let before = state.clone();

        let result = ReorderCards::new(&board, &column, 3, 0).execute(&mut state);

        assert!(matches!(
            result,
            Err(BoardError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(state, before);
    }
}
