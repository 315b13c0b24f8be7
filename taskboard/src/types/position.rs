//! Ordering helpers shared by column and card commands.
//!
//! Order is always the order of a `Vec`. These helpers implement the splice
//! semantics used by drag-reordering: remove at one index, reinsert at another.

use crate::error::{BoardError, Result};

/// Move the element at `start` so that it ends up at index `end`.
///
/// Both indices must address existing elements. `start == end` leaves the list
/// unchanged.
pub fn move_within<T>(items: &mut Vec<T>, start: usize, end: usize) -> Result<()> {
    let len = items.len();
    for index in [start, end] {
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
    }
    if start != end {
        let item = items.remove(start);
        items.insert(end, item);
    }
    Ok(())
}

/// Insert `item` at `index`, appending when `index` is past the end.
///
/// Returns the index the item landed at.
pub fn insert_clamped<T>(items: &mut Vec<T>, index: usize, item: T) -> usize {
    let index = index.min(items.len());
    items.insert(index, item);
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 2, vec!['b', 'c', 'a', 'd'])]
    #[case(2, 0, vec!['c', 'a', 'b', 'd'])]
    #[case(1, 1, vec!['a', 'b', 'c', 'd'])]
    #[case(0, 3, vec!['b', 'c', 'd', 'a'])]
    #[case(3, 0, vec!['d', 'a', 'b', 'c'])]
    fn test_move_within(#[case] start: usize, #[case] end: usize, #[case] expected: Vec<char>) {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_within(&mut items, start, end).unwrap();
        assert_eq!(items, expected);
    }

    #[rstest]
    #[case(4, 0)]
    #[case(0, 4)]
    fn test_move_within_out_of_range(#[case] start: usize, #[case] end: usize) {
        let mut items = vec![1, 2, 3, 4];
        let result = move_within(&mut items, start, end);
        assert!(matches!(
            result,
            Err(BoardError::IndexOutOfRange { index: 4, len: 4 })
        ));
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_move_within_empty() {
        let mut items: Vec<u8> = Vec::new();
        assert!(move_within(&mut items, 0, 0).is_err());
    }

    #[test]
    fn test_insert_clamped() {
        let mut items = vec![1, 2];
        assert_eq!(insert_clamped(&mut items, 1, 9), 1);
        assert_eq!(items, vec![1, 9, 2]);
        assert_eq!(insert_clamped(&mut items, 100, 7), 3);
        assert_eq!(items, vec![1, 9, 2, 7]);
    }
}
