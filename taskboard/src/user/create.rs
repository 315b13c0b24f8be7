//! CreateUser command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, User, UserId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Add a user that cards on the board can be assigned to
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateUser {
    /// The owning board
    pub board_id: BoardId,
    /// Display name
    pub name: String,
    pub email: Option<String>,
    /// Avatar URL
    pub avatar: Option<String>,
}

operation!(
    CreateUser,
    verb = "create",
    noun = "user",
    description = "Add a user to a board"
);

impl CreateUser {
    pub fn new(board_id: impl Into<BoardId>, name: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            name: name.into(),
            email: None,
            avatar: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

impl Execute<AppState, BoardError> for CreateUser {
    type Output = UserId;

    fn execute(&self, state: &mut AppState) -> Result<UserId> {
        let board = state.board_mut(&self.board_id)?;

        let mut user = User::new(&self.name);
        user.email = self.email.clone();
        user.avatar = self.avatar.clone();
        let id = user.id.clone();
        board.users.push(user);
        board.touch();

        tracing::debug!(user = %id, name = %self.name, "created user");
        Ok(id)
    }
}
