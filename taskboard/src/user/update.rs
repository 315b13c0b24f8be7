//! UpdateUser command

use crate::error::{BoardError, Result};
use crate::types::{AppState, BoardId, UserId};
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Edit a user's profile fields
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateUser {
    /// The owning board
    pub board_id: BoardId,
    /// The user ID to update
    pub id: UserId,
    pub name: Option<String>,
    /// `Some(None)` clears the email
    pub email: Option<Option<String>>,
    /// `Some(None)` clears the avatar
    pub avatar: Option<Option<String>>,
}

operation!(
    UpdateUser,
    verb = "update",
    noun = "user",
    description = "Update a user's name, email or avatar"
);

impl UpdateUser {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<UserId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = Some(avatar);
        self
    }
}

impl Execute<AppState, BoardError> for UpdateUser {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        let board = state.board_mut(&self.board_id)?;
        let user = board.user_mut(&self.id)?;

        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = avatar.clone();
        }
        board.touch();
        Ok(())
    }
}
