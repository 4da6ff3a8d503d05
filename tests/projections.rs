//! Integration tests for the read-only helpers: turn summary, finish check, and
//! turn-total splitting.

use dart_match_scorer::{
    is_valid_finish, record_score, split_turn_total, start_match, turn_totals, MatchConfig,
    MatchState,
};

fn fresh() -> MatchState {
    start_match(MatchConfig::default()).unwrap()
}

fn accept_all(mut state: MatchState, values: &[i32]) -> MatchState {
    for &value in values {
        let (next, outcome) = record_score(&state, value);
        assert!(outcome.accepted(), "score {value} rejected: {outcome:?}");
        state = next;
    }
    state
}

#[test]
fn turn_totals_empty_at_match_start() {
    assert!(turn_totals(&fresh()).is_empty());
}

#[test]
fn turn_totals_group_history_in_threes() {
    // Player 1: full turn (340), then two darts of a second turn (46).
    // Player 2: one full turn (180).
    let m = accept_all(fresh(), &[100, 140, 100, 60, 60, 60, 45, 1]);

    let turns = turn_totals(&m);
    assert_eq!(turns.len(), 2);

    assert_eq!(turns[0].turn_number, 1);
    assert_eq!(turns[0].player1_total, Some(340));
    assert_eq!(turns[0].player2_total, Some(180));

    assert_eq!(turns[1].turn_number, 2);
    assert_eq!(turns[1].player1_total, Some(46));
    assert_eq!(turns[1].player2_total, None);
}

#[test]
fn turn_totals_include_partial_turns() {
    let m = accept_all(fresh(), &[26]);
    let turns = turn_totals(&m);
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].player1_total, Some(26));
    assert_eq!(turns[0].player2_total, None);
}

#[test]
fn valid_finishes_are_bull_or_doubles() {
    assert!(is_valid_finish(50));
    assert!(is_valid_finish(2));
    assert!(is_valid_finish(24));
    assert!(is_valid_finish(40));

    assert!(!is_valid_finish(0));
    assert!(!is_valid_finish(1));
    assert!(!is_valid_finish(25));
    assert!(!is_valid_finish(39));
    assert!(!is_valid_finish(42));
    assert!(!is_valid_finish(180));
}

#[test]
fn split_distributes_across_three_darts() {
    assert_eq!(split_turn_total(180, 1), vec![60, 60, 60]);
    assert_eq!(split_turn_total(100, 1), vec![34, 33, 33]);
    assert_eq!(split_turn_total(101, 1), vec![34, 34, 33]);
    assert_eq!(split_turn_total(0, 1), vec![0, 0, 0]);
}

#[test]
fn split_distributes_across_remaining_darts() {
    assert_eq!(split_turn_total(75, 2), vec![38, 37]);
    assert_eq!(split_turn_total(60, 2), vec![30, 30]);
    assert_eq!(split_turn_total(60, 3), vec![60]);
}

#[test]
fn split_parts_always_sum_to_the_total() {
    for total in 0..=180 {
        for dart in 1..=3 {
            let parts = split_turn_total(total, dart);
            assert_eq!(parts.iter().map(|&p| u32::from(p)).sum::<u32>(), u32::from(total));
            assert_eq!(parts.len(), 4 - usize::from(dart));
        }
    }
}
