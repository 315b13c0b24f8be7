//! CreateLabel command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, Label, LabelId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Create a label on a board.
///
/// Without an explicit color the label gets a palette color derived from its
/// name, so the same name always gets the same color.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateLabel {
    /// The owning board
    pub board_id: BoardId,
    /// The label name
    pub name: String,
    /// Optional hex color
    pub color: Option<String>,
}

operation!(
    CreateLabel,
    verb = "create",
    noun = "label",
    description = "Create a label on a board"
);

impl CreateLabel {
    pub fn new(board_id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            name: name.into(),
            color: None,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Execute<AppState, BoardError> for CreateLabel {
    type Output = LabelId;

    fn execute(&self, state: &mut AppState) -> Result<LabelId> {
        let board = state.board_mut(&self.board_id)?;

        let mut label = Label::new(&self.name);
        if let Some(color) = &self.color {
            label = label.with_color(color);
        }
        let id = label.id.clone();
        board.labels.push(label);
        board.touch();

        tracing::debug!(label = %id, name = %self.name, "created label");
        Ok(id)
    }
}
