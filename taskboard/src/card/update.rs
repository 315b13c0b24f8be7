//! UpdateCard command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, CardId, LabelId, Priority, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Edit card fields. Column membership is changed with `MoveCard`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateCard {
    /// The owning board
    pub board_id: BoardId,
    /// The card ID to update
    pub id: CardId,
    /// New title
    pub title: Option<String>,
    /// New description; `Some(None)` clears it
    pub description: Option<Option<String>>,
    /// New priority
    pub priority: Option<Priority>,
    /// New due date; `Some(None)` clears it
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement label set
    pub labels: Option<Vec<LabelId>>,
    /// Replacement assignee set
    pub assignees: Option<Vec<UserId>>,
}

operation!(
    UpdateCard,
    verb = "update",
    noun = "card",
    description = "Update card title, description, priority, due date, labels or assignees"
);

impl UpdateCard {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<CardId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LabelId>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_assignees<I, U>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        self.assignees = Some(assignees.into_iter().map(Into::into).collect());
        self
    }
}

/// Keep the first occurrence of each id
fn dedup<T: PartialEq + Clone>(ids: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}

impl Execute<AppState, BoardError> for UpdateCard {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        let board = state.board_mut(&self.board_id)?;
        board.card(&self.id)?;

        // Reject unknown references before touching anything
        if let Some(labels) = &self.labels {
            if let Some(missing) = labels.iter().find(|id| board.find_label(id).is_none()) {
                return Err(BoardError::LabelNotFound {
                    id: missing.to_string(),
                });
            }
        }
        if let Some(assignees) = &self.assignees {
            if let Some(missing) = assignees.iter().find(|id| board.find_user(id).is_none()) {
                return Err(BoardError::UserNotFound {
                    id: missing.to_string(),
                });
            }
        }
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(BoardError::invalid_value("title", "must not be empty"));
            }
        }

        let card = board.card_mut(&self.id)?;
        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(priority) = self.priority {
            card.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            card.due_date = due_date;
        }
        if let Some(labels) = &self.labels {
            card.labels = dedup(labels);
        }
        if let Some(assignees) = &self.assignees {
            card.assignees = dedup(assignees);
        }
        card.touch();
        board.touch();

        tracing::debug!(card = %self.id, "updated card");
        Ok(())
    }
}
