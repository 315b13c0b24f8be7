//! UpdateBoard command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, Settings};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Update board metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateBoard {
    /// The board to update
    pub id: BoardId,
    /// New board title
    pub title: Option<String>,
    /// New board description (`Some(None)` clears it)
    pub description: Option<Option<String>>,
    /// Replacement settings
    pub settings: Option<Settings>,
}

operation!(
    UpdateBoard,
    verb = "update",
    noun = "board",
    description = "Update board title, description or settings"
);

impl UpdateBoard {
    /// Create a new UpdateBoard command
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            settings: None,
        }
    }

    /// Set the new title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the new description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Remove the description
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replace the settings
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl Execute<AppState, BoardError> for UpdateBoard {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        let board = state.board_mut(&self.id)?;

        if let Some(title) = &self.title {
            board.title = title.clone();
        }
        if let Some(description) = &self.description {
            board.description = description.clone();
        }
        if let Some(settings) = &self.settings {
            board.settings = settings.clone();
        }

        board.touch();
        Ok(())
    }
}
