//! DuplicateBoard command

use crate::error::{BoardError, Result};
use crate::types::{AppState, Board, BoardId, Card, CardId, Column, ColumnId};
use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use taskboard_operations::{operation, Execute};

/// Deep-copy a board under fresh ids and select the copy.
///
/// The board, every column and every card get new ids, and column card lists
/// and card column references are remapped to them. Labels and users keep
/// their ids: they are scoped to their board, so the copy and the original
/// never share them.
#[derive(Debug, Deserialize, Serialize)]
pub struct DuplicateBoard {
    /// The board ID to copy
    pub id: BoardId,
}

operation!(
    DuplicateBoard,
    verb = "duplicate",
    noun = "board",
    description = "Copy a board with all of its columns and cards"
);

impl DuplicateBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<AppState, BoardError> for DuplicateBoard {
    type Output = BoardId;

    fn execute(&self, state: &mut AppState) -> Result<BoardId> {
        let original = state.board(&self.id)?.clone();
        let now = Utc::now();
        let new_id = BoardId::new();

        let card_map: HashMap<CardId, CardId> = original
            .cards
            .keys()
            .map(|id| (id.clone(), CardId::new()))
            .collect();

        let mut column_map: HashMap<ColumnId, ColumnId> = HashMap::new();
        let columns: Vec<Column> = original
            .columns
            .iter()
            .map(|column| {
                let id = ColumnId::new();
                column_map.insert(column.id.clone(), id.clone());
                Column {
                    id,
                    card_ids: column
                        .card_ids
                        .iter()
                        .filter_map(|card_id| card_map.get(card_id).cloned())
                        .collect(),
                    board_id: new_id.clone(),
                    ..column.clone()
                }
            })
            .collect();

        let cards: IndexMap<CardId, Card> = original
            .cards
            .iter()
            .filter_map(|(old_id, card)| {
                let id = card_map.get(old_id)?.clone();
                let column_id = column_map.get(&card.column_id)?.clone();
                let copy = Card {
                    id: id.clone(),
                    column_id,
                    created_at: now,
                    updated_at: now,
                    ..card.clone()
                };
                Some((id, copy))
            })
            .collect();

        let title = format!("{} (Copy)", original.title);
        let copy = Board {
            id: new_id.clone(),
            title,
            columns,
            cards,
            created_at: now,
            updated_at: now,
            ..original
        };

        state.insert_board(copy);
        state.current_board_id = Some(new_id.clone());

        tracing::info!(source = %self.id, board = %new_id, "duplicated board");
        Ok(new_id)
    }
}
