//! Reasons a move is refused.
//!
//! A rejection is never fatal: the engine attaches its message to the state
//! and leaves everything else as it was.

use thiserror::Error;

use crate::core::{CardId, Rank, Side};
use crate::piles::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("the game is over")]
    GameOver,

    #[error("it is the {expected}'s turn, not the {actor}'s")]
    NotYourTurn { expected: Side, actor: Side },

    #[error("the {side} does not hold card {card}")]
    CardNotInHand { side: Side, card: CardId },

    #[error("pile {0} does not exist")]
    NoSuchPile(usize),

    #[error("only face cards may be played on the opponent's piles")]
    NumericOnOpponentPile,

    #[error("face cards may only be played on an opponent's pile that already has cards")]
    OpponentPileEmpty,

    #[error("{value} does not continue the {direction} run after {last}")]
    BreaksDirection {
        value: u32,
        last: u32,
        direction: Direction,
    },

    #[error("a {0} needs a card to attach to")]
    EmptyPile(Rank),

    #[error("there is no card at position {0}")]
    NoCardAt(usize),

    #[error("a King must target a live numeric card (position {0} is not one)")]
    InvalidKingTarget(usize),

    #[error("there is no live numeric card for the King to target")]
    NoKingTarget,

    #[error("a Jack cannot remove a Jack or a card already removed (position {0})")]
    InvalidJackTarget(usize),

    #[error("there is no card for the Jack to remove")]
    NoJackTarget,
}
