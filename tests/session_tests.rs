//! Session integration tests.
//!
//! A `ManualClock` drives time so shake expiry and the end-of-game
//! latch can be checked exactly.

use std::time::Duration;

use set_engine::cards::{CardAttributes, DECK_SIZE};
use set_engine::core::{HintFallback, NoShuffle, SessionConfig, SetConfig};
use set_engine::engine::{EndReason, HintOutcome, Layout, SelectOutcome, SetEngine};
use set_engine::error::SetError;
use set_engine::session::{GameSession, ManualClock};
use set_engine::CardId;

const SET_FREE_12: [usize; 12] = [0, 1, 3, 4, 9, 10, 12, 13, 27, 28, 32, 35];

fn layout(table: &[usize], draw: &[usize]) -> Layout {
    let pick = |indices: &[usize]| -> Vec<CardAttributes> {
        indices
            .iter()
            .map(|&i| CardAttributes::from_index(i).expect("index in deck"))
            .collect()
    };
    let discard: Vec<usize> = (0..DECK_SIZE)
        .filter(|i| !table.contains(i) && !draw.contains(i))
        .collect();
    Layout::new(pick(draw), pick(table), pick(&discard))
}

fn factory_session(config: SessionConfig) -> (GameSession<ManualClock, NoShuffle>, ManualClock) {
    let clock = ManualClock::new();
    let engine = SetEngine::with_shuffler(SetConfig::default(), NoShuffle).unwrap();
    (GameSession::new(engine, clock.clone(), config), clock)
}

fn layout_session(
    layout: &Layout,
    config: SessionConfig,
) -> (GameSession<ManualClock, NoShuffle>, ManualClock) {
    let clock = ManualClock::new();
    let engine = SetEngine::from_layout(SetConfig::default(), NoShuffle, layout).unwrap();
    (GameSession::new(engine, clock.clone(), config), clock)
}

fn table_ids(session: &GameSession<ManualClock, NoShuffle>) -> Vec<CardId> {
    session.cards().iter().map(|c| c.id).collect()
}

// =============================================================================
// Timing
// =============================================================================

#[test]
fn test_elapsed_runs_while_in_progress() {
    let (session, clock) = factory_session(SessionConfig::default());
    assert_eq!(session.elapsed(), Duration::ZERO);

    clock.advance(Duration::from_secs(3));
    assert_eq!(session.elapsed(), Duration::from_secs(3));
    assert_eq!(session.time_taken(), None);
}

#[test]
fn test_elapsed_latches_at_end() {
    let (mut session, clock) = layout_session(&layout(&[0, 1, 2], &[]), SessionConfig::default());
    let ids = table_ids(&session);

    clock.advance(Duration::from_secs(5));
    session.select(ids[0]).unwrap();
    session.select(ids[1]).unwrap();
    assert!(session.select(ids[2]).unwrap().matched());

    assert!(session.is_over());
    assert_eq!(session.time_taken(), Some(Duration::from_secs(5)));

    clock.advance(Duration::from_secs(60));
    assert_eq!(session.elapsed(), Duration::from_secs(5));
    assert_eq!(session.time_taken(), Some(Duration::from_secs(5)));
}

#[test]
fn test_ended_engine_latches_immediately() {
    let mut table = SET_FREE_12.to_vec();
    table.extend([59, 65, 66, 67, 71, 77, 38, 47]);
    let (session, clock) = layout_session(&layout(&table, &[]), SessionConfig::default());

    assert!(session.is_over());
    assert_eq!(
        session.status().end_reason(),
        Some(EndReason::NoSetRemains)
    );
    clock.advance(Duration::from_secs(1));
    assert_eq!(session.time_taken(), Some(Duration::ZERO));
}

#[test]
fn test_new_game_restarts_clock() {
    let (mut session, clock) = layout_session(&layout(&[0, 1, 2], &[]), SessionConfig::default());
    let ids = table_ids(&session);
    clock.advance(Duration::from_secs(2));
    for id in ids {
        session.select(id).unwrap();
    }
    assert!(session.time_taken().is_some());

    clock.advance(Duration::from_secs(10));
    session.new_game();
    assert!(!session.is_over());
    assert_eq!(session.time_taken(), None);
    assert_eq!(session.elapsed(), Duration::ZERO);

    clock.advance(Duration::from_secs(4));
    assert_eq!(session.elapsed(), Duration::from_secs(4));
}

#[test]
fn test_select_after_end_is_rejected() {
    let (mut session, _clock) = layout_session(&layout(&[0, 1, 2], &[]), SessionConfig::default());
    let ids = table_ids(&session);
    for id in &ids {
        session.select(*id).unwrap();
    }
    assert_eq!(
        session.select(ids[0]),
        Err(SetError::GameOver(EndReason::AllCardsMatched))
    );
    assert_eq!(
        session.deal_more(),
        Err(SetError::GameOver(EndReason::AllCardsMatched))
    );
}

// =============================================================================
// Shake Feedback
// =============================================================================

#[test]
fn test_mismatch_shakes_until_deadline() {
    let config = SessionConfig::default().with_shake_duration(Duration::from_millis(200));
    let (mut session, clock) = factory_session(config);
    let ids = table_ids(&session);

    session.select(ids[0]).unwrap();
    session.select(ids[1]).unwrap();
    let outcome = session.select(ids[3]).unwrap();
    assert_eq!(outcome, SelectOutcome::Mismatched([ids[0], ids[1], ids[3]]));

    let shaking = session.shaking_ids().expect("shake set after mismatch");
    assert_eq!(shaking.len(), 3);
    assert!(session.is_shaking(ids[3]));
    assert!(!session.is_shaking(ids[2]));

    clock.advance(Duration::from_millis(199));
    assert!(session.shaking_ids().is_some());
    assert!(!session.expire_transients());

    clock.advance(Duration::from_millis(1));
    assert!(session.shaking_ids().is_none());
    assert!(session.expire_transients());
    assert!(!session.expire_transients());
}

#[test]
fn test_clear_shake() {
    let (mut session, _clock) = factory_session(SessionConfig::default());
    let ids = table_ids(&session);
    for id in [ids[0], ids[1], ids[3]] {
        session.select(id).unwrap();
    }
    assert!(session.shaking_ids().is_some());

    session.clear_shake();
    assert!(session.shaking_ids().is_none());
}

#[test]
fn test_newer_mismatch_replaces_shake() {
    let (mut session, clock) = factory_session(SessionConfig::default());
    let ids = table_ids(&session);

    for id in [ids[0], ids[1], ids[3]] {
        session.select(id).unwrap();
    }
    clock.advance(Duration::from_millis(150));
    // 4, 5, 6: colours pink, blue, purple but shading striped, striped, open.
    for id in [ids[4], ids[5], ids[6]] {
        session.select(id).unwrap();
    }

    assert!(!session.is_shaking(ids[0]));
    assert!(session.is_shaking(ids[6]));

    // The second deadline is measured from the second mismatch.
    clock.advance(Duration::from_millis(100));
    assert!(session.is_shaking(ids[6]));
}

#[test]
fn test_match_does_not_shake() {
    let (mut session, _clock) = factory_session(SessionConfig::default());
    let ids = table_ids(&session);
    for id in [ids[0], ids[1], ids[2]] {
        session.select(id).unwrap();
    }
    assert!(session.shaking_ids().is_none());
    assert_eq!(session.matched_count(), 3);
}

// =============================================================================
// Hints
// =============================================================================

#[test]
fn test_hint_highlights_until_selection_changes() {
    let (mut session, _clock) = factory_session(SessionConfig::default());
    let ids = table_ids(&session);

    let hint = session.give_hint();
    assert_eq!(hint, HintOutcome::Found([ids[0], ids[1], ids[2]]));
    assert!(session.hint_shown());
    assert!(session.is_hinted(ids[1]));
    assert_eq!(session.hinted_ids().len(), 3);

    // Tapping a card off the table changes nothing.
    session.select(CardId(9999)).unwrap();
    assert!(session.hint_shown());

    session.select(ids[7]).unwrap();
    assert!(!session.hint_shown());
}

#[test]
fn test_hint_is_idempotent() {
    let (mut session, _clock) = factory_session(SessionConfig::default());
    let first = session.give_hint();
    let second = session.give_hint();
    assert_eq!(first, second);
}

#[test]
fn test_hint_without_fallback_leaves_table() {
    let (mut session, _clock) =
        layout_session(&layout(&SET_FREE_12, &[2]), SessionConfig::default());

    assert_eq!(session.give_hint(), HintOutcome::NoSetOnTable);
    assert!(!session.hint_shown());
    assert_eq!(session.cards().len(), 12);
    assert!(session.can_deal_more());
}

#[test]
fn test_hint_fallback_deals_and_retries() {
    let config = SessionConfig::default().with_hint_fallback(HintFallback::AutoDeal);
    let (mut session, _clock) = layout_session(&layout(&SET_FREE_12, &[2]), config);

    let hint = session.give_hint();
    assert!(hint.found());
    assert_eq!(session.cards().len(), 13);
    assert!(session.hint_shown());
    assert!(!session.can_deal_more());
}

#[test]
fn test_hint_fallback_with_empty_draw() {
    let config = SessionConfig::default().with_hint_fallback(HintFallback::AutoDeal);
    // 12 set-free cards on the table plus the completing card: the set is
    // on the table, so the fallback never triggers.
    let mut table = SET_FREE_12.to_vec();
    table.push(2);
    let (mut session, _clock) = layout_session(&layout(&table, &[]), config);

    assert!(session.give_hint().found());
    assert_eq!(session.cards().len(), 13);
}

#[test]
fn test_start_with_defaults() {
    let session = GameSession::start(21).unwrap();
    assert_eq!(session.cards().len(), 12);
    assert_eq!(session.matched_count(), 0);
    assert!(!session.is_over());
    assert_eq!(session.config(), &SessionConfig::default());
}
