//! ReorderColumns command

use crate::error::{BoardError, Result};
use crate::types::position::move_within;
use crate::types::{AppState, BoardId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Move the column at `start_index` to `end_index`
#[derive(Debug, Deserialize, Serialize)]
pub struct ReorderColumns {
    /// The owning board
    pub board_id: BoardId,
    /// Current index of the column being moved
    pub start_index: usize,
    /// Index the column ends up at
    pub end_index: usize,
}

operation!(
    ReorderColumns,
    verb = "reorder",
    noun = "columns",
    description = "Move a column to a new index"
);

impl ReorderColumns {
    pub fn new(board_id: impl Into<BoardId>, start_index: usize, end_index: usize) -> Self {
        Self {
            board_id: board_id.into(),
            start_index,
            end_index,
        }
    }
}

impl Execute<AppState, BoardError> for ReorderColumns {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        let board = state.board_mut(&self.board_id)?;
        move_within(&mut board.columns, self.start_index, self.end_index)?;
        board.compact_positions();
        board.touch();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::column::CreateColumn;
    use rstest::rstest;

    fn setup() -> (AppState, BoardId) {
        let mut state = AppState::default();
        let board = CreateBoard::new("Test").execute(&mut state).unwrap();
        for title in ["A", "B", "C", "D"] {
            CreateColumn::new(&board, title).execute(&mut state).unwrap();
        }
        (state, board)
    }

    fn titles(state: &AppState, board: &BoardId) -> Vec<String> {
        state
            .board(board)
            .unwrap()
            .columns
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    #[rstest]
    #[case(0, 2, "BCAD")]
    #[case(3, 1, "ADBC")]
    #[case(1, 1, "ABCD")]
    fn test_reorder_columns(#[case] start: usize, #[case] end: usize, #[case] expected: &str) {
        let (mut state, board) = setup();

        ReorderColumns::new(&board, start, end)
            .execute(&mut state)
            .unwrap();

        assert_eq!(titles(&state, &board).concat(), expected);
        let positions: Vec<_> = state
            .board(&board)
            .unwrap()
            .columns
            .iter()
            .map(|c| c.position)
            .collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_reorder_out_of_range_is_rejected() {
        let (mut state, board) = setup();
        let before = state.clone();

        let result = ReorderColumns::new(&board, 0, 4).execute(&mut state);

        assert!(matches!(
            result,
            Err(BoardError::IndexOutOfRange { index: 4, len: 4 })
        ));
        assert_eq!(state, before);
    }
}
