//! How the automated side picks among its legal moves.
//!
//! Strategies are trait-based so the live game can pick at random while
//! tests substitute a deterministic choice.

use crate::core::{GameRng, GameState, PlaceCard};

/// Pick one move from an already-validated candidate list.
pub trait MoveStrategy: Send + Sync {
    /// Returns `None` only when `candidates` is empty.
    fn choose(
        &self,
        candidates: &[PlaceCard],
        state: &GameState,
        rng: &mut GameRng,
    ) -> Option<PlaceCard>;
}

/// Uniform random choice.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl MoveStrategy for RandomStrategy {
    fn choose(
        &self,
        candidates: &[PlaceCard],
        _state: &GameState,
        rng: &mut GameRng,
    ) -> Option<PlaceCard> {
        rng.choose(candidates).copied()
    }
}

/// Always the first candidate in enumeration order.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalStrategy;

impl MoveStrategy for FirstLegalStrategy {
    fn choose(
        &self,
        candidates: &[PlaceCard],
        _state: &GameState,
        _rng: &mut GameRng,
    ) -> Option<PlaceCard> {
        candidates.first().copied()
    }
}
