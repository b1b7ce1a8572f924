//! Timed AI turn tests.
//!
//! These tests run on a paused tokio clock and verify that a pending AI
//! decision is thrown away when:
//! - The game is reset
//! - The AI is disabled
//! - The move count moves on before the delay ends

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use caravan_engine::ai::{
    enumerate_candidates, run_ai_turn, spawn_ai_turn, AiTurnOutcome, FirstLegalStrategy,
    RandomStrategy,
};
use caravan_engine::core::{GameConfig, Side};
use caravan_engine::session::GameSession;

/// Session where the human has just made the first move.
fn after_human_move(seed: u64) -> GameSession {
    let mut session = GameSession::new(GameConfig::default().with_seed(seed)).unwrap();
    let mv = enumerate_candidates(session.state(), Side::Player)[0];
    session.apply_move(mv);
    assert_eq!(session.state().turn, Side::Ai);
    session
}

/// Test that the AI waits inside the configured delay before acting.
#[tokio::test(start_paused = true)]
async fn test_ai_acts_after_delay() {
    let session = Arc::new(Mutex::new(after_human_move(5)));
    let started = tokio::time::Instant::now();

    let outcome = run_ai_turn(&session, &RandomStrategy).await;

    let waited = started.elapsed();
    assert!(waited >= Duration::from_millis(600), "waited {waited:?}");
    assert!(waited <= Duration::from_millis(1200), "waited {waited:?}");
    assert!(matches!(outcome, Some(AiTurnOutcome::Committed(_))));

    let session = session.lock().await;
    assert_eq!(session.state().move_count, 2);
    assert!(session.run_invariants().is_clean());
}

/// Test that a reset during deliberation discards the decision.
#[tokio::test(start_paused = true)]
async fn test_stale_after_reset() {
    let session = Arc::new(Mutex::new(after_human_move(6)));
    let handle = spawn_ai_turn(session.clone(), Arc::new(FirstLegalStrategy));

    tokio::time::sleep(Duration::from_millis(50)).await;
    session.lock().await.reset_game();

    assert_eq!(handle.await.unwrap(), Some(AiTurnOutcome::Stale));
    let session = session.lock().await;
    assert_eq!(session.state().move_count, 0);
    assert_eq!(session.state().turn, Side::Player);
}

/// Test that disabling the AI during deliberation discards the decision.
#[tokio::test(start_paused = true)]
async fn test_stale_after_disable() {
    let session = Arc::new(Mutex::new(after_human_move(7)));
    let handle = spawn_ai_turn(session.clone(), Arc::new(FirstLegalStrategy));

    tokio::time::sleep(Duration::from_millis(50)).await;
    session.lock().await.set_ai_enabled(false);

    assert_eq!(handle.await.unwrap(), Some(AiTurnOutcome::Stale));
    let session = session.lock().await;
    assert_eq!(session.state().move_count, 1);
    assert_eq!(session.state().turn, Side::Ai);
}

/// Test that a decision scheduled before another commit is discarded.
#[tokio::test(start_paused = true)]
async fn test_stale_after_move_count_changes() {
    let mut session = after_human_move(8);
    let pending = session.schedule_ai_turn().unwrap();

    // Another path commits the AI's move first.
    let mv = enumerate_candidates(session.state(), Side::Ai)[0];
    session.apply_move(mv);
    assert_eq!(session.state().move_count, 2);

    assert_eq!(session.resolve_ai_turn(&pending, &FirstLegalStrategy), AiTurnOutcome::Stale);
    assert_eq!(session.state().move_count, 2);
}

/// Test that aborting the spawned task leaves the game untouched.
#[tokio::test(start_paused = true)]
async fn test_abort_cancels_decision() {
    let session = Arc::new(Mutex::new(after_human_move(9)));
    let handle = spawn_ai_turn(session.clone(), Arc::new(RandomStrategy));

    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(session.lock().await.state().move_count, 1);
}
