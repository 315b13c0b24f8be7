//! Read-side projections of a board for rendering and search

use crate::types::{Board, Card, Column, ColumnId, Label, User};
use serde::Serialize;

/// A card with its label and assignee references resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView<'a> {
    pub card: &'a Card,
    pub labels: Vec<&'a Label>,
    pub assignees: Vec<&'a User>,
    /// Index of the card within its column
    pub ordinal: usize,
}

/// A column with its cards in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub cards: Vec<CardView<'a>>,
    /// Advisory: more cards than the WIP limit
    pub over_wip_limit: bool,
}

impl Board {
    /// Cards of a column in list order. Unknown columns yield nothing.
    pub fn column_cards(&self, column_id: &ColumnId) -> Vec<&Card> {
        self.find_column(column_id)
            .map(|column| {
                column
                    .card_ids
                    .iter()
                    .filter_map(|id| self.cards.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn card_view<'a>(&'a self, card: &'a Card, ordinal: usize) -> CardView<'a> {
        CardView {
            card,
            labels: card
                .labels
                .iter()
                .filter_map(|id| self.find_label(id))
                .collect(),
            assignees: card
                .assignees
                .iter()
                .filter_map(|id| self.find_user(id))
                .collect(),
            ordinal,
        }
    }

    /// Every column, in order, with resolved cards
    pub fn column_views(&self) -> Vec<ColumnView<'_>> {
        self.columns
            .iter()
            .map(|column| ColumnView {
                column,
                cards: column
                    .card_ids
                    .iter()
                    .filter_map(|id| self.cards.get(id))
                    .enumerate()
                    .map(|(ordinal, card)| self.card_view(card, ordinal))
                    .collect(),
                over_wip_limit: column.is_over_wip_limit(),
            })
            .collect()
    }

    /// Cards matching `query` in title, description or label name,
    /// ignoring case. Results follow column order, then list order.
    ///
    /// An empty or blank query matches every card.
    pub fn search_cards(&self, query: &str) -> Vec<CardView<'_>> {
        let needle = query.trim().to_lowercase();
        self.column_views()
            .into_iter()
            .flat_map(|column| column.cards)
            .filter(|view| needle.is_empty() || view.matches(&needle))
            .collect()
    }
}

impl CardView<'_> {
    fn matches(&self, needle: &str) -> bool {
        self.card.title.to_lowercase().contains(needle)
            || self
                .card
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
            || self
                .labels
                .iter()
                .any(|l| l.name.to_lowercase().contains(needle))
    }
}
