//! Board-level types: Board, Column, Label, User, Settings

use super::card::Card;
use super::ids::{BoardId, CardId, ColumnId, LabelId, UserId};
use crate::error::{BoardError, Result};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::num::NonZeroU32;

/// Color given to columns created without one
pub const DEFAULT_COLUMN_COLOR: &str = "#6b7280";

/// Theme of a freshly created board
pub const DEFAULT_THEME: &str = "github-dark";

/// A kanban board: owns its columns, cards, labels and users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Columns in display order
    #[serde(default)]
    pub columns: Vec<Column>,
    /// All cards of the board. Order here carries no meaning; columns own order.
    #[serde(default)]
    pub cards: IndexMap<CardId, Card>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub settings: Settings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    /// Create an empty board with default settings
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BoardId::new(),
            title: title.into(),
            description: None,
            columns: Vec::new(),
            cards: IndexMap::new(),
            labels: Vec::new(),
            users: Vec::new(),
            settings: Settings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Refresh `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Find a column by ID
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by ID, failing with `ColumnNotFound`
    pub fn column(&self, id: &ColumnId) -> Result<&Column> {
        self.find_column(id)
            .ok_or_else(|| BoardError::ColumnNotFound { id: id.to_string() })
    }

    /// Find a column by ID (mutable)
    pub fn column_mut(&mut self, id: &ColumnId) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| BoardError::ColumnNotFound { id: id.to_string() })
    }

    /// Index of a column in display order
    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Find a card by ID, failing with `CardNotFound`
    pub fn card(&self, id: &CardId) -> Result<&Card> {
        self.cards
            .get(id)
            .ok_or_else(|| BoardError::CardNotFound { id: id.to_string() })
    }

    /// Find a card by ID (mutable)
    pub fn card_mut(&mut self, id: &CardId) -> Result<&mut Card> {
        self.cards
            .get_mut(id)
            .ok_or_else(|| BoardError::CardNotFound { id: id.to_string() })
    }

    /// The column whose card list contains `card_id`
    pub fn column_of(&self, card_id: &CardId) -> Option<&Column> {
        self.columns.iter().find(|c| c.card_ids.contains(card_id))
    }

    /// Index of a card within its column; this is the card's display position
    pub fn card_ordinal(&self, card_id: &CardId) -> Option<usize> {
        self.column_of(card_id)
            .and_then(|c| c.card_ids.iter().position(|id| id == card_id))
    }

    /// Find a label by ID
    pub fn find_label(&self, id: &LabelId) -> Option<&Label> {
        self.labels.iter().find(|l| &l.id == id)
    }

    /// Find a label by ID (mutable)
    pub fn label_mut(&mut self, id: &LabelId) -> Result<&mut Label> {
        self.labels
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| BoardError::LabelNotFound { id: id.to_string() })
    }

    /// Find a user by ID
    pub fn find_user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Find a user by ID (mutable)
    pub fn user_mut(&mut self, id: &UserId) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| BoardError::UserNotFound { id: id.to_string() })
    }

    /// Rewrite every column's `position` to its index in `columns`.
    ///
    /// Called after any change to column membership or order.
    pub fn compact_positions(&mut self) {
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.position = index;
        }
    }

    /// Remove a card from the map and from whichever column lists it
    pub(crate) fn remove_card(&mut self, card_id: &CardId) -> Option<Card> {
        for column in &mut self.columns {
            column.card_ids.retain(|id| id != card_id);
        }
        self.cards.shift_remove(card_id)
    }
}

/// A column defines a workflow stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
    /// Card ids in display order
    #[serde(default)]
    pub card_ids: Vec<CardId>,
    /// Advisory capacity; never enforced as a hard block
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_wip_limit"
    )]
    pub wip_limit: Option<NonZeroU32>,
    /// Index among the board's columns
    #[serde(default)]
    pub position: usize,
    pub board_id: BoardId,
}

impl Column {
    /// Create an empty column
    pub fn new(board_id: BoardId, title: impl Into<String>, position: usize) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            color: DEFAULT_COLUMN_COLOR.to_string(),
            card_ids: Vec::new(),
            wip_limit: None,
            position,
            board_id,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// True when the column holds more cards than its WIP limit allows
    pub fn is_over_wip_limit(&self) -> bool {
        self.wip_limit
            .is_some_and(|limit| self.card_ids.len() > limit.get() as usize)
    }
}

/// Older exports write `0` for "no limit"
fn deserialize_wip_limit<'de, D>(deserializer: D) -> std::result::Result<Option<NonZeroU32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.and_then(NonZeroU32::new))
}

/// A label categorizes cards. Cards reference labels by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    pub color: String,
}

impl Label {
    /// Create a label with an auto-color derived from its name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let color = crate::auto_color::auto_color(&name).to_string();
        Self {
            id: LabelId::new(),
            name,
            color,
        }
    }

    /// Create a label with an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// A person that cards can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create a user with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: None,
            avatar: None,
        }
    }
}

/// Board-level feature toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub allow_descriptions: bool,
    pub allow_labels: bool,
    pub allow_assignees: bool,
    pub allow_due_dates: bool,
    pub allow_priorities: bool,
    pub wip_limits_enabled: bool,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_descriptions: true,
            allow_labels: true,
            allow_assignees: true,
            allow_due_dates: true,
            allow_priorities: true,
            wip_limits_enabled: false,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation() {
        let board = Board::new("Test Board");
        assert_eq!(board.title, "Test Board");
        assert!(board.description.is_none());
        assert!(board.columns.is_empty());
        assert_eq!(board.created_at, board.updated_at);
        assert_eq!(board.settings, Settings::default());
    }

    #[test]
    fn test_board_with_description() {
        let board = Board::new("Test").with_description("A test board");
        assert_eq!(board.description, Some("A test board".into()));
    }

    #[test]
    fn test_compact_positions() {
        let mut board = Board::new("Test");
        for (title, position) in [("A", 4), ("B", 0), ("C", 9)] {
            board
                .columns
                .push(Column::new(board.id.clone(), title, position));
        }
        board.compact_positions();
        let positions: Vec<_> = board.columns.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_wip_limit_reads_as_none() {
        let json = r##"{"id":"c","title":"T","color":"#fff","boardId":"b","wipLimit":0}"##;
        let column: Column = serde_json::from_str(json).unwrap();
        assert_eq!(column.wip_limit, None);
    }

    #[test]
    fn test_wip_limit() {
        let mut column = Column::new(BoardId::new(), "Doing", 0);
        assert!(!column.is_over_wip_limit());

        column.wip_limit = NonZeroU32::new(1);
        column.card_ids.push(CardId::new());
        assert!(!column.is_over_wip_limit());
        column.card_ids.push(CardId::new());
        assert!(column.is_over_wip_limit());
    }

    #[test]
    fn test_settings_serialization() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["allowDueDates"], true);
        assert_eq!(json["wipLimitsEnabled"], false);
        assert_eq!(json["theme"], "github-dark");

        // Missing toggles fall back to defaults
        let partial: Settings = serde_json::from_str(r#"{"theme": "light"}"#).unwrap();
        assert_eq!(partial.theme, "light");
        assert!(partial.allow_labels);
    }

    #[test]
    fn test_label_auto_color() {
        let label = Label::new("Bug");
        assert!(label.color.starts_with('#'));
        assert_eq!(label.color, Label::new("Bug").color);
        assert_eq!(Label::new("Bug").with_color("#dc2626").color, "#dc2626");
    }
}
