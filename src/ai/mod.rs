//! The automated opponent.
//!
//! - `generator`: legal move enumeration
//! - `strategy`: picking one of them
//! - `scheduler`: the deliberation delay and stale-decision guard

pub mod generator;
pub mod scheduler;
pub mod strategy;

pub use generator::{enumerate_candidates, propose_move};
pub use scheduler::{run_ai_turn, spawn_ai_turn, AiTurnOutcome, PendingDecision};
pub use strategy::{FirstLegalStrategy, MoveStrategy, RandomStrategy};
