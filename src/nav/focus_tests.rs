//! Tests for focus bookkeeping

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_has_no_focus() {
    assert_eq!(FocusState::new().get(), None);
}

#[test]
fn test_next_from_none_focuses_first() {
    let mut focus = FocusState::new();
    focus.next(3);
    assert_eq!(focus.get(), Some(0));
}

#[test]
fn test_next_wraps_to_first() {
    let mut focus = FocusState { index: Some(2) };
    focus.next(3);
    assert_eq!(focus.get(), Some(0));
}

#[test]
fn test_previous_from_none_focuses_last() {
    let mut focus = FocusState::new();
    focus.previous(4);
    assert_eq!(focus.get(), Some(3));
}

#[test]
fn test_previous_wraps_to_last() {
    let mut focus = FocusState { index: Some(0) };
    focus.previous(4);
    assert_eq!(focus.get(), Some(3));
}

#[test]
fn test_out_of_range_index_recovers() {
    let mut focus = FocusState { index: Some(7) };
    focus.next(3);
    assert_eq!(focus.get(), Some(0));

    let mut focus = FocusState { index: Some(7) };
    focus.previous(3);
    assert_eq!(focus.get(), Some(2));
}

#[test]
fn test_no_rows_is_noop() {
    let mut focus = FocusState::new();
    focus.next(0);
    focus.previous(0);
    assert_eq!(focus.get(), None);
}

#[test]
fn test_clear() {
    let mut focus = FocusState { index: Some(1) };
    focus.clear();
    assert_eq!(focus.get(), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Focus always stays inside the list
    #[test]
    fn prop_focus_stays_in_range(
        count in 1usize..20,
        moves in prop::collection::vec(prop::bool::ANY, 0..50)
    ) {
        let mut focus = FocusState::new();
        for down in moves {
            if down { focus.next(count) } else { focus.previous(count) }
            let index = focus.get();
            prop_assert!(index.is_some_and(|i| i < count));
        }
    }

    // A full cycle of downs returns to the starting row
    #[test]
    fn prop_full_cycle_returns_home(count in 1usize..20, start in 0usize..20) {
        let start = start % count;
        let mut focus = FocusState { index: Some(start) };
        for _ in 0..count {
            focus.next(count);
        }
        prop_assert_eq!(focus.get(), Some(start));
    }

    // Down then up is the identity on a focused row
    #[test]
    fn prop_next_then_previous_is_identity(count in 1usize..20, start in 0usize..20) {
        let start = start % count;
        let mut focus = FocusState { index: Some(start) };
        focus.next(count);
        focus.previous(count);
        prop_assert_eq!(focus.get(), Some(start));
    }
}
