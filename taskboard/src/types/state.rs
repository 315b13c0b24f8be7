//! The application snapshot held by the store

use super::board::Board;
use super::ids::BoardId;
use crate::error::{BoardError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything the store knows: all boards plus UI-facing flags.
///
/// Boards iterate in insertion order, which decides the fallback selection
/// after a delete and the selection after a replacing import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub boards: IndexMap<BoardId, Board>,
    #[serde(default)]
    pub current_board_id: Option<BoardId>,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl AppState {
    /// Look up a board, failing with `BoardNotFound`
    pub fn board(&self, id: &BoardId) -> Result<&Board> {
        self.boards
            .get(id)
            .ok_or_else(|| BoardError::BoardNotFound { id: id.to_string() })
    }

    /// Look up a board (mutable)
    pub fn board_mut(&mut self, id: &BoardId) -> Result<&mut Board> {
        self.boards
            .get_mut(id)
            .ok_or_else(|| BoardError::BoardNotFound { id: id.to_string() })
    }

    /// The selected board. A dangling selection reads as no board.
    pub fn current_board(&self) -> Option<&Board> {
        self.current_board_id
            .as_ref()
            .and_then(|id| self.boards.get(id))
    }

    /// Insert a board under its own id
    pub(crate) fn insert_board(&mut self, board: Board) {
        self.boards.insert(board.id.clone(), board);
    }
}
