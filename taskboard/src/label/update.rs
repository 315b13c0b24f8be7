//! UpdateLabel command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, LabelId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Rename or recolor a label. Cards hold label ids, so nothing else changes.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateLabel {
    /// The owning board
    pub board_id: BoardId,
    /// The label ID to update
    pub id: LabelId,
    /// New name
    pub name: Option<String>,
    /// New color
    pub color: Option<String>,
}

operation!(
    UpdateLabel,
    verb = "update",
    noun = "label",
    description = "Update a label's name or color"
);

impl UpdateLabel {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<LabelId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
            name: None,
            color: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Execute<AppState, BoardError> for UpdateLabel {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        let board = state.board_mut(&self.board_id)?;
        let label = board.label_mut(&self.id)?;

        if let Some(name) = &self.name {
            label.name = name.clone();
        }
        if let Some(color) = &self.color {
            label.color = color.clone();
        }
        board.touch();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CreateBoard;
    use crate::card::{CreateCard, UpdateCard};
    use crate::column::CreateColumn;
    use crate::label::CreateLabel;

    #[test]
    fn test_update_label_visible_through_cards() {
        let mut state = AppState::default();
        let board = CreateBoard::new("Test").execute(&mut state).unwrap();
        let column = CreateColumn::new(&board, "To Do")
            .execute(&mut state)
            .unwrap();
        let card = CreateCard::new(&board, &column, "Card")
            .execute(&mut state)
            .unwrap();
        let label = CreateLabel::new(&board, "Bug").execute(&mut state).unwrap();
        UpdateCard::new(&board, &card)
            .with_labels([&label])
            .execute(&mut state)
            .unwrap();

        UpdateLabel::new(&board, &label)
            .with_name("Defect")
            .with_color("#000000")
            .execute(&mut state)
            .unwrap();

        let board = state.board(&board).unwrap();
        let resolved = board.find_label(&board.card(&card).unwrap().labels[0]).unwrap();
        assert_eq!(resolved.name, "Defect");
        assert_eq!(resolved.color, "#000000");
    }

    #[test]
    fn test_update_missing_label() {
        let mut state = AppState::default();
        let board = CreateBoard::new("Test").execute(&mut state).unwrap();
        let result = UpdateLabel::new(&board, "missing")
            .with_name("x")
            .execute(&mut state);
        assert!(matches!(result, Err(BoardError::LabelNotFound { .. })));
    }
}
