//! Timed AI turns.
//!
//! The AI waits a random delay before acting. The wait happens with the
//! session unlocked, so the game can be reset or the AI disabled meanwhile;
//! the decision token and move count captured at scheduling time decide
//! whether the move is still wanted when the delay ends.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::strategy::MoveStrategy;
use crate::core::PlaceCard;
use crate::session::GameSession;

/// A scheduled AI decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingDecision {
    pub token: u64,
    /// Committed moves when the decision was scheduled.
    pub move_count: u32,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiTurnOutcome {
    Committed(PlaceCard),
    /// No legal move; the turn went back to the human.
    Skipped,
    /// Reset, disabled or overtaken while deliberating. Nothing applied.
    Stale,
}

/// Run one AI turn: schedule, wait, resolve.
///
/// Returns `None` when there was nothing to schedule.
pub async fn run_ai_turn<S: MoveStrategy + ?Sized>(
    session: &Mutex<GameSession>,
    strategy: &S,
) -> Option<AiTurnOutcome> {
    let pending = session.lock().await.schedule_ai_turn()?;

    tokio::time::sleep(pending.delay).await;

    let mut session = session.lock().await;
    Some(session.resolve_ai_turn(&pending, strategy))
}

/// Run an AI turn in the background. Aborting the handle drops the decision.
pub fn spawn_ai_turn(
    session: Arc<Mutex<GameSession>>,
    strategy: Arc<dyn MoveStrategy>,
) -> JoinHandle<Option<AiTurnOutcome>> {
    tokio::spawn(async move { run_ai_turn(&session, strategy.as_ref()).await })
}
