//! # caravan-engine
//!
//! Rules engine for Caravan, a two-player card game played on three piles
//! per side.
//!
//! ## Design Principles
//!
//! 1. **One Commit Path**: Every move, human or AI, goes through
//!    `CaravanRules::place_card`. Everything else only reads.
//!
//! 2. **Derived, Never Stored**: Pile values, King multipliers, direction and
//!    totals are recomputed from the raw pile history on every read.
//!
//! 3. **Persistent State**: `GameState` is built on `im-rs` collections, so a
//!    commit is a cheap clone plus an edit and old states stay valid.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, sides, configuration, moves, state, RNG
//! - `piles`: Piles and the pile evaluator
//! - `rules`: Move validation and the state machine
//! - `ai`: Move enumeration, strategies and the timed AI turn
//! - `diagnostics`: Invariant checks over state and move log
//! - `session`: The facade renderers and input layers talk to

pub mod ai;
pub mod core;
pub mod diagnostics;
pub mod piles;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Card, CardId, Color, ConfigError, GameConfig, GameRng, GameState, MoveLogEntry,
    PlaceCard, Rank, Side, SideMap, SkipRecord, Suit, DECK_SIZE,
};

pub use crate::piles::{
    compute_pile_view, compute_player_totals, Direction, Pile, PileView, PlayerTotals,
};

pub use crate::rules::{CaravanRules, GameResult, MoveRejection, PlacementVerdict};

pub use crate::ai::{
    enumerate_candidates, propose_move, run_ai_turn, spawn_ai_turn, AiTurnOutcome,
    FirstLegalStrategy, MoveStrategy, PendingDecision, RandomStrategy,
};

pub use crate::diagnostics::{run_invariants, InvariantReport, InvariantViolation};

pub use crate::session::{DropTarget, GameSession, IntentError, MoveIntent, StateSnapshot};
