//! SeedSampleData command

use crate::board::CreateBoard;
use crate::card::CreateCard;
use crate::column::CreateColumn;
use crate::error::{BoardError, Result};
use crate::label::CreateLabel;
use crate::types::{AppState, BoardId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

const SAMPLE_LABELS: &[(&str, &str)] = &[
    ("Bug", "#dc2626"),
    ("Feature", "#3b82f6"),
    ("Improvement", "#8b5cf6"),
];

/// Populate an empty store with a starter board.
///
/// Does nothing when any board already exists, so it is safe to run on every
/// startup.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SeedSampleData;

operation!(
    SeedSampleData,
    verb = "seed",
    noun = "board",
    description = "Create a sample board when no boards exist"
);

impl SeedSampleData {
    pub fn new() -> Self {
        Self
    }
}

impl Execute<AppState, BoardError> for SeedSampleData {
    type Output = Option<BoardId>;

    fn execute(&self, state: &mut AppState) -> Result<Option<BoardId>> {
        if !state.boards.is_empty() {
            tracing::debug!(boards = state.boards.len(), "skipping sample data");
            return Ok(None);
        }

        let board = CreateBoard::new("My First Board")
            .with_description("Welcome! This is your first Kanban board.")
            .execute(state)?;

        let todo = CreateColumn::new(&board, "To Do")
            .with_color("#6b7280")
            .execute(state)?;
        let doing = CreateColumn::new(&board, "In Progress")
            .with_color("#f59e0b")
            .execute(state)?;
        let done = CreateColumn::new(&board, "Done")
            .with_color("#10b981")
            .execute(state)?;

        for (name, color) in SAMPLE_LABELS {
            CreateLabel::new(&board, *name)
                .with_color(*color)
                .execute(state)?;
        }

        let cards = [
            (
                &todo,
                "Welcome to your board",
                "This is your first card! Open it to edit and customize it.",
            ),
            (
                &todo,
                "Explore the features",
                "Try creating new boards, columns, and cards to organize your work.",
            ),
            (
                &doing,
                "Customize your board",
                "Add labels, set due dates, and assign team members to cards.",
            ),
            (
                &done,
                "Set up the board",
                "Congratulations! Your board is ready to use.",
            ),
        ];
        for (column, title, description) in cards {
            CreateCard::new(&board, column, title)
                .with_description(description)
                .execute(state)?;
        }

        tracing::info!(board = %board, "seeded sample data");
        Ok(Some(board))
    }
}
