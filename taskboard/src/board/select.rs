//! SetCurrentBoard command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Change the selected board.
///
/// The id is not validated: selecting an unknown board leaves a dangling
/// selection that reads back as "no board".
#[derive(Debug, Deserialize, Serialize)]
pub struct SetCurrentBoard {
    /// The board to select, or `None` to clear the selection
    pub id: Option<BoardId>,
}

operation!(
    SetCurrentBoard,
    verb = "select",
    noun = "board",
    description = "Select the current board"
);

impl SetCurrentBoard {
    pub fn new(id: Option<BoardId>) -> Self {
        Self { id }
    }
}

impl Execute<AppState, BoardError> for SetCurrentBoard {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        state.current_board_id = self.id.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;

    #[test]
    fn test_select_board() {
        let mut state = AppState::default();
        let first = CreateBoard::new("First").execute(&mut state).unwrap();
        CreateBoard::new("Second").execute(&mut state).unwrap();

        SetCurrentBoard::new(Some(first.clone()))
            .execute(&mut state)
            .unwrap();

        assert_eq!(state.current_board().map(|b| b.title.as_str()), Some("First"));
    }

    #[test]
    fn test_clear_selection() {
        let mut state = AppState::default();
        CreateBoard::new("Board").execute(&mut state).unwrap();

        SetCurrentBoard::new(None).execute(&mut state).unwrap();

        assert!(state.current_board_id.is_none());
    }

    #[test]
    fn test_select_unknown_board_is_dangling() {
        let mut state = AppState::default();

        SetCurrentBoard::new(Some("ghost".into()))
            .execute(&mut state)
            .unwrap();

        assert_eq!(state.current_board_id, Some(BoardId::from("ghost")));
        assert!(state.current_board().is_none());
    }
}
