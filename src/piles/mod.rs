//! Piles and their derived views.
//!
//! A `Pile` stores raw cards; `evaluator` folds that history into values,
//! direction and totals on every read.

pub mod evaluator;
pub mod pile;

pub use evaluator::{
    compute_pile_view, compute_player_totals, Direction, PileEntry, PileView, PlayerTotals,
    TargetIndices, PILES_PER_SIDE,
};
pub use pile::Pile;
