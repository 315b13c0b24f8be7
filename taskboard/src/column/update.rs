//! UpdateColumn command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, ColumnId};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use taskboard_operations::{operation, Execute};

/// Update a column's title, color or WIP limit
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateColumn {
    /// The owning board
    pub board_id: BoardId,
    /// The column to update
    pub id: ColumnId,
    /// New title
    pub title: Option<String>,
    /// New color
    pub color: Option<String>,
    /// New WIP limit (`Some(None)` removes the limit)
    pub wip_limit: Option<Option<NonZeroU32>>,
}

operation!(
    UpdateColumn,
    verb = "update",
    noun = "column",
    description = "Update column title, color or WIP limit"
);

impl UpdateColumn {
    /// Create a new UpdateColumn command
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<ColumnId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
            title: None,
            color: None,
            wip_limit: None,
        }
    }

    /// Set the new title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the new color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set or clear the WIP limit
    pub fn with_wip_limit(mut self, limit: Option<NonZeroU32>) -> Self {
        self.wip_limit = Some(limit);
        self
    }
}

impl Execute<AppState, BoardError> for UpdateColumn {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        let board = state.board_mut(&self.board_id)?;
        let column = board.column_mut(&self.id)?;

        if let Some(title) = &self.title {
            column.title = title.clone();
        }
        if let Some(color) = &self.color {
            column.color = color.clone();
        }
        if let Some(limit) = self.wip_limit {
            column.wip_limit = limit;
        }

        board.touch();
        Ok(())
    }
}
