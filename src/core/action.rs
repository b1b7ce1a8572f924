//! Moves and the move log.
//!
//! A `PlaceCard` is the only kind of move in Caravan: a card from the actor's
//! hand onto one of the six piles, optionally aimed at a card already there.
//! Every committed move leaves a `MoveLogEntry` behind; a passed AI turn
//! leaves a `SkipRecord`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::card::{CardId, Rank};
use super::side::Side;

/// A request to play `card_id` from `actor`'s hand.
///
/// ## Example
///
/// ```
/// use caravan_engine::core::{CardId, PlaceCard, Side};
///
/// // Numeric card onto the actor's own first pile.
/// let own = PlaceCard::new(Side::Player, Side::Player, CardId::new(4), 0);
///
/// // King aimed at the second card of the opponent's third pile.
/// let king = PlaceCard::new(Side::Player, Side::Ai, CardId::new(12), 2).targeting(1);
/// assert_eq!(king.target_index, Some(1));
/// assert!(own.target_index.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceCard {
    pub actor: Side,
    /// Owner of the pile being played on.
    pub target: Side,
    pub card_id: CardId,
    pub pile_index: usize,
    /// Visible index of the card a face card is aimed at.
    pub target_index: Option<usize>,
}

impl PlaceCard {
    #[must_use]
    pub fn new(actor: Side, target: Side, card_id: CardId, pile_index: usize) -> Self {
        Self {
            actor,
            target,
            card_id,
            pile_index,
            target_index: None,
        }
    }

    #[must_use]
    pub fn targeting(mut self, index: usize) -> Self {
        self.target_index = Some(index);
        self
    }
}

/// Record of one committed move. Never modified once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLogEntry {
    pub actor: Side,
    pub target: Side,
    pub card_id: CardId,
    pub rank: Rank,
    pub pile_index: usize,
    /// Card the move was aimed at, if any.
    pub target_index: Option<usize>,
    /// Where the card landed in the pile.
    pub insert_index: usize,
    /// Pile length before the card landed.
    pub pile_len_before: usize,
    pub turn_before: Side,
    pub turn_after: Side,
    pub deck_len_after: usize,
    pub timestamp: DateTime<Utc>,
}

/// A turn the AI passed because it had no legal move.
///
/// Skips are not moves: they draw nothing and leave `move_count` alone, but
/// they are recorded so the turn order can still be audited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRecord {
    pub side: Side,
    /// Committed moves at the time of the skip.
    pub after_moves: u32,
    pub timestamp: DateTime<Utc>,
}
