//! Shared helpers for integration tests

use std::collections::HashSet;
use taskboard::AppState;

/// Check the structural invariants of every board in `state`:
/// column positions are `0..n`, every card sits in exactly one column list,
/// the card's `column_id` names that column, and label and assignee references
/// resolve.
pub fn assert_invariants(state: &AppState) {
    for (key, board) in &state.boards {
        assert_eq!(&board.id, key, "board keyed under a foreign id");

        let positions: Vec<_> = board.columns.iter().map(|c| c.position).collect();
        let expected: Vec<_> = (0..board.columns.len()).collect();
        assert_eq!(positions, expected, "column positions not contiguous");

        let mut placed = HashSet::new();
        for column in &board.columns {
            assert_eq!(column.board_id, board.id);
            for card_id in &column.card_ids {
                assert!(placed.insert(card_id.clone()), "card {card_id} listed twice");
                let card = board
                    .cards
                    .get(card_id)
                    .unwrap_or_else(|| panic!("dangling card ref {card_id}"));
                assert_eq!(card.column_id, column.id, "card {card_id} column mismatch");
            }
        }
        assert_eq!(placed.len(), board.cards.len(), "card not listed in any column");

        for card in board.cards.values() {
            for label in &card.labels {
                assert!(board.find_label(label).is_some(), "unknown label {label}");
            }
            for user in &card.assignees {
                assert!(board.find_user(user).is_some(), "unknown assignee {user}");
            }
        }
    }
}
