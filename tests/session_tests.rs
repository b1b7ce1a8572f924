//! Session facade tests.
//!
//! These tests drive the engine the way a UI would:
//! - JSON drag payloads and drop targets
//! - Drop hints for pile containers and cards
//! - Snapshots for rendering

use caravan_engine::ai::enumerate_candidates;
use caravan_engine::core::{GameConfig, Rank, Side};
use caravan_engine::session::{DropTarget, GameSession, IntentError, StateSnapshot};

fn session(seed: u64) -> GameSession {
    GameSession::new(GameConfig::default().with_seed(seed)).unwrap()
}

/// Test a legal move arriving as JSON.
#[test]
fn test_json_intent_commits() {
    let mut session = session(31);
    let mv = enumerate_candidates(session.state(), Side::Player)[0];
    let payload = format!(r#"{{"source":"hand","owner":"player","cardId":{}}}"#, mv.card_id.0);
    let drop = DropTarget {
        side: mv.target,
        pile_index: mv.pile_index,
        card_index: mv.target_index,
    };

    let state = session.apply_intent_json(&payload, &drop).unwrap();
    assert_eq!(state.move_count, 1);
    assert!(state.card_in_hand(Side::Player, mv.card_id).is_none());
    assert_eq!(state.last_move().unwrap().card_id, mv.card_id);
}

/// Test that a well-formed but illegal intent is a rules refusal, not an intent error.
#[test]
fn test_illegal_intent_sets_message() {
    let mut session = session(32);
    let card = session.state().hand(Side::Player)[0];
    let payload = format!(r#"{{"source":"hand","owner":"player","cardId":{}}}"#, card.id.0);

    // Nothing may go on the opponent's empty piles.
    let state = session
        .apply_intent_json(&payload, &DropTarget::pile(Side::Ai, 1))
        .unwrap();
    assert_eq!(state.move_count, 0);
    assert!(state.message.is_some());
}

/// Test that malformed payloads are ignored.
#[test]
fn test_malformed_intents_are_ignored() {
    let mut session = session(33);
    let before = session.state().clone();
    let drop = DropTarget::pile(Side::Player, 0);

    let err = session.apply_intent_json("[1, 2", &drop).unwrap_err();
    assert!(matches!(err, IntentError::Malformed(_)));

    let err = session
        .apply_intent_json(r#"{"source":"pile","owner":"player","cardId":0}"#, &drop)
        .unwrap_err();
    assert!(matches!(err, IntentError::NotFromHand));

    assert_eq!(session.state(), &before);
}

/// Test drop hints against both kinds of drop target.
#[test]
fn test_drop_hints() {
    let session = session(34);
    for card in session.state().hand(Side::Player).iter() {
        let own = session.can_drop_on_target_pile_container(Side::Player, card.id, Side::Player, 0);
        let expected = !matches!(card.rank, Rank::King | Rank::Jack);
        assert_eq!(own.ok, expected, "{card:?}");
        assert_eq!(own.reason.is_none(), expected);

        let theirs = session.can_drop_on_target_pile_card(Side::Player, card.id, Side::Ai, 0, 0);
        assert!(!theirs.ok);
    }

    // The AI may not act on the human's turn.
    let ai_card = session.state().hand(Side::Ai)[0];
    let verdict = session.can_drop_on_target_pile_container(Side::Ai, ai_card.id, Side::Ai, 0);
    assert_eq!(verdict.reason.as_deref(), Some("it is the player's turn, not the ai's"));
}

/// Test that hints never change the state.
#[test]
fn test_hints_are_pure() {
    let session = session(35);
    let before = session.state().clone();
    for card in before.hand(Side::Player).iter() {
        for pile in 0..3 {
            let _ = session.can_drop_on_target_pile_container(
                Side::Player,
                card.id,
                Side::Player,
                pile,
            );
        }
    }
    assert_eq!(session.state(), &before);
}

/// Test the snapshot after a move, including its JSON form.
#[test]
fn test_snapshot_after_move() {
    let mut session = session(36);
    let mv = enumerate_candidates(session.state(), Side::Player)[0];
    session.apply_move(mv);

    let snap = session.snapshot();
    assert_eq!(snap.move_count, 1);
    assert_eq!(snap.turn, Side::Ai);
    assert_eq!(snap.deck_count, 41);
    assert!(snap.ai_enabled);
    let pile = &snap.sides[mv.target].piles[mv.pile_index];
    assert_eq!(pile.cards.len(), 1);
    assert_eq!(pile.total, pile.view.total);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["turn"], "ai");
    assert_eq!(json["moveCount"], 1);
    let back: StateSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snap);
}

/// Test that a reset deals a fresh game.
#[test]
fn test_reset_deals_fresh_game() {
    let mut session = session(37);
    let mv = enumerate_candidates(session.state(), Side::Player)[0];
    session.apply_move(mv);

    let state = session.reset_game();
    assert_eq!(state.move_count, 0);
    assert_eq!(state.deck_len(), 42);
    assert!(state.move_log.is_empty());
    assert!(session.run_invariants().is_clean());
}
