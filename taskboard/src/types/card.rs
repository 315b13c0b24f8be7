//! Card types: Card, Priority

use super::ids::{CardId, ColumnId, LabelId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Urgency of a card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A card (work item) on a board.
///
/// A card has no stored ordinal: its position is its index in the owning
/// column's `card_ids`. Labels and assignees are held by id and resolved
/// against the board when read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accepts label ids, or full label objects written by older exports
    #[serde(default, deserialize_with = "deserialize_label_refs")]
    pub labels: Vec<LabelId>,
    #[serde(default)]
    pub assignees: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub column_id: ColumnId,
}

impl Card {
    /// Create a card in the given column with default priority
    pub fn new(column_id: ColumnId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: CardId::new(),
            title: title.into(),
            description: None,
            labels: Vec::new(),
            assignees: Vec::new(),
            due_date: None,
            priority: Priority::default(),
            created_at: now,
            updated_at: now,
            column_id,
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

    /// True when the due date has passed at `now`
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_date.is_some_and(|due| due < now)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelRef {
    Id(LabelId),
    Embedded { id: LabelId },
}

fn deserialize_label_refs<'de, D>(deserializer: D) -> Result<Vec<LabelId>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs = Vec::<LabelRef>::deserialize(deserializer)?;
    Ok(refs
        .into_iter()
        .map(|r| match r {
            LabelRef::Id(id) | LabelRef::Embedded { id } => id,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_card_creation() {
        let card = Card::new(ColumnId::from_string("todo"), "Test card");
        assert_eq!(card.title, "Test card");
        assert_eq!(card.priority, Priority::Medium);
        assert!(card.labels.is_empty());
        assert!(card.assignees.is_empty());
        assert_eq!(card.column_id.as_str(), "todo");
    }

    #[test]
    fn test_card_serialization_is_camel_case() {
        let card = Card::new(ColumnId::from_string("todo"), "Test").with_description("Body");
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["columnId"], "todo");
        assert_eq!(json["priority"], "medium");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("dueDate").is_none());
        assert!(json.get("position").is_none());
    }

    #[test]
    fn test_legacy_card_format() {
        // Older exports embed whole labels and carry a numeric position
        let json = r##"{
            "id": "card-1",
            "title": "Legacy",
            "labels": [{"id": "l1", "name": "Bug", "color": "#dc2626"}, "l2"],
            "assignees": ["u1"],
            "dueDate": "2024-03-01T00:00:00.000Z",
            "priority": "high",
            "createdAt": "2024-01-01T10:00:00.000Z",
            "updatedAt": "2024-01-02T10:00:00.000Z",
            "columnId": "todo",
            "position": 3
        }"##;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.labels, vec![LabelId::from("l1"), LabelId::from("l2")]);
        assert_eq!(card.priority, Priority::High);
        assert!(card.due_date.is_some());

        let serialized = serde_json::to_value(&card).unwrap();
        assert_eq!(serialized["labels"], serde_json::json!(["l1", "l2"]));
        assert!(serialized.get("position").is_none());
    }

    #[test]
    fn test_overdue() {
        let now = Utc::now();
        let mut card = Card::new(ColumnId::new(), "Due");
        assert!(!card.is_overdue(now));
        card.due_date = Some(now - Duration::days(1));
        assert!(card.is_overdue(now));
        card.due_date = Some(now + Duration::days(1));
        assert!(!card.is_overdue(now));
    }
}
