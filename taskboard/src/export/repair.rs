//! Normalization of imported boards.
//!
//! Imported documents are untrusted. Every board is rewritten so that each card
//! sits in exactly one column list, card and column back-references agree,
//! column positions are contiguous and label/assignee references resolve.

use crate::types::{Board, BoardId, CardId, ColumnId};
use std::collections::HashSet;

/// Repair `board` in place, returning how many defects were fixed.
///
/// Each fix is reported with `tracing::warn!`.
pub fn repair_board(key: &BoardId, board: &mut Board) -> usize {
    let mut repairs = 0;

    if &board.id != key {
        tracing::warn!(board = %key, embedded = %board.id, "board id differs from its key");
        board.id = key.clone();
        repairs += 1;
    }

    let mut column_ids: HashSet<ColumnId> = HashSet::new();
    board.columns.retain(|column| {
        let fresh = column_ids.insert(column.id.clone());
        if !fresh {
            tracing::warn!(board = %key, column = %column.id, "dropping duplicate column");
        }
        fresh
    });
    repairs += board.columns.iter().filter(|c| &c.board_id != key).count();
    for column in &mut board.columns {
        column.board_id = key.clone();
    }

    for (card_key, card) in board.cards.iter_mut() {
        if &card.id != card_key {
            tracing::warn!(card = %card_key, embedded = %card.id, "card id differs from its key");
            card.id = card_key.clone();
            repairs += 1;
        }
    }

    // First listing wins; later and dangling references are dropped
    let mut placed: HashSet<CardId> = HashSet::new();
    for column in &mut board.columns {
        let cards = &board.cards;
        column.card_ids.retain(|id| {
            if !cards.contains_key(id) {
                tracing::warn!(column = %column.id, card = %id, "dropping dangling card reference");
                repairs += 1;
                false
            } else if !placed.insert(id.clone()) {
                tracing::warn!(column = %column.id, card = %id, "dropping duplicate card reference");
                repairs += 1;
                false
            } else {
                true
            }
        });
    }

    for column in &board.columns {
        for id in &column.card_ids {
            if let Some(card) = board.cards.get_mut(id) {
                if card.column_id != column.id {
                    tracing::warn!(card = %id, column = %column.id, "fixing card column reference");
                    card.column_id = column.id.clone();
                    repairs += 1;
                }
            }
        }
    }

    let orphans: Vec<(CardId, ColumnId)> = board
        .cards
        .values()
        .filter(|card| !placed.contains(&card.id))
        .map(|card| (card.id.clone(), card.column_id.clone()))
        .collect();
    for (card_id, column_id) in orphans {
        repairs += 1;
        match board.columns.iter_mut().find(|c| c.id == column_id) {
            Some(column) => {
                tracing::warn!(card = %card_id, column = %column_id, "appending orphan card");
                column.card_ids.push(card_id);
            }
            None => {
                tracing::warn!(card = %card_id, column = %column_id, "dropping card with no column");
                board.cards.shift_remove(&card_id);
            }
        }
    }

    let label_ids: HashSet<_> = board.labels.iter().map(|l| l.id.clone()).collect();
    let user_ids: HashSet<_> = board.users.iter().map(|u| u.id.clone()).collect();
    for card in board.cards.values_mut() {
        let before = card.labels.len() + card.assignees.len();
        card.labels.retain(|id| label_ids.contains(id));
        card.assignees.retain(|id| user_ids.contains(id));
        let dropped = before - card.labels.len() - card.assignees.len();
        if dropped > 0 {
            tracing::warn!(card = %card.id, dropped, "dropping unknown label or assignee references");
            repairs += dropped;
        }
    }

    if board.columns.iter().enumerate().any(|(i, c)| c.position != i) {
        repairs += 1;
    }
    board.compact_positions();

    repairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Card, Column, Label, LabelId, UserId};
    use tracing_test::traced_test;

    fn board_with_columns(titles: &[&str]) -> (Board, Vec<ColumnId>) {
        let mut board = Board::new("Imported");
        let ids = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let column = Column::new(board.id.clone(), *title, i);
                let id = column.id.clone();
                board.columns.push(column);
                id
            })
            .collect();
        (board, ids)
    }

    fn add_card(board: &mut Board, column: &ColumnId, listed: bool) -> CardId {
        let card = Card::new(column.clone(), "card");
        let id = card.id.clone();
        board.cards.insert(id.clone(), card);
        if listed {
            board.column_mut(column).unwrap().card_ids.push(id.clone());
        }
        id
    }

    #[test]
    fn test_clean_board_needs_no_repair() {
        let (mut board, columns) = board_with_columns(&["A", "B"]);
        add_card(&mut board, &columns[0], true);
        let key = board.id.clone();
        let before = board.clone();

        assert_eq!(repair_board(&key, &mut board), 0);
        assert_eq!(board, before);
    }

    #[test]
    #[traced_test]
    fn test_key_wins_over_embedded_id() {
        let (mut board, _) = board_with_columns(&["A"]);
        let key = BoardId::from_string("from-key");

        repair_board(&key, &mut board);

        assert_eq!(board.id, key);
        assert_eq!(board.columns[0].board_id, key);
        assert!(logs_contain("board id differs from its key"));
    }

    #[test]
    fn test_dangling_and_duplicate_refs_dropped() {
        let (mut board, columns) = board_with_columns(&["A", "B"]);
        let card = add_card(&mut board, &columns[0], true);
        board.columns[0].card_ids.push(CardId::from_string("ghost"));
        board.columns[1].card_ids.push(card.clone());
        let key = board.id.clone();

        let repairs = repair_board(&key, &mut board);

        assert_eq!(repairs, 2);
        assert_eq!(board.columns[0].card_ids, vec![card]);
        assert!(board.columns[1].card_ids.is_empty());
    }

    #[test]
    fn test_card_column_reference_follows_list() {
        let (mut board, columns) = board_with_columns(&["A", "B"]);
        let card = add_card(&mut board, &columns[0], true);
        board.cards.get_mut(&card).unwrap().column_id = columns[1].clone();
        let key = board.id.clone();

        repair_board(&key, &mut board);

        assert_eq!(board.card(&card).unwrap().column_id, columns[0]);
    }

    #[test]
    #[traced_test]
    fn test_orphans_appended_or_dropped() {
        let (mut board, columns) = board_with_columns(&["A"]);
        let listed = add_card(&mut board, &columns[0], true);
        let orphan = add_card(&mut board, &columns[0], false);
        let homeless = add_card(&mut board, &ColumnId::from_string("gone"), false);
        let key = board.id.clone();

        repair_board(&key, &mut board);

        assert_eq!(board.columns[0].card_ids, vec![listed, orphan]);
        assert!(!board.cards.contains_key(&homeless));
        assert!(logs_contain("appending orphan card"));
        assert!(logs_contain("dropping card with no column"));
    }

    #[test]
    fn test_unknown_label_and_user_refs_dropped() {
        let (mut board, columns) = board_with_columns(&["A"]);
        let label = Label::new("Bug");
        let label_id = label.id.clone();
        board.labels.push(label);
        let card = add_card(&mut board, &columns[0], true);
        {
            let card = board.cards.get_mut(&card).unwrap();
            card.labels = vec![label_id.clone(), LabelId::from_string("stale")];
            card.assignees = vec![UserId::from_string("nobody")];
        }
        let key = board.id.clone();

        assert_eq!(repair_board(&key, &mut board), 2);
        let card = board.card(&card).unwrap();
        assert_eq!(card.labels, vec![label_id]);
        assert!(card.assignees.is_empty());
    }

    #[test]
    fn test_positions_compacted() {
        let (mut board, _) = board_with_columns(&["A", "B", "C"]);
        board.columns[0].position = 7;
        board.columns[2].position = 3;
        let key = board.id.clone();

        repair_board(&key, &mut board);

        let positions: Vec<_> = board.columns.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }
}
