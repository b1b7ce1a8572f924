//! Move legality.
//!
//! Checks run in a fixed order:
//!
//! 1. Opponent piles take face cards only, and only once they have cards.
//! 2. Numeric cards append, and must keep the pile's direction.
//! 3. Kings need a live numeric target.
//! 4. Jacks need something to remove; Jacks themselves are immune.
//! 5. Queens are always legal on their owner's piles, empty or not.
//!
//! Nothing here mutates. The same checks serve commits, UI hints and the AI.

use serde::{Deserialize, Serialize};

use super::error::MoveRejection;
use crate::core::{Card, Rank, Side};
use crate::piles::Pile;

/// Where a legal card lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Raw index the card is inserted at.
    pub insert_index: usize,
    /// Card the move acts on (King binds to it, Jack removes it).
    pub target_index: Option<usize>,
}

impl Placement {
    fn append(pile: &Pile) -> Self {
        Self {
            insert_index: pile.len(),
            target_index: None,
        }
    }

    fn after(target: usize) -> Self {
        Self {
            insert_index: target + 1,
            target_index: Some(target),
        }
    }
}

/// Yes/no answer with a human-readable reason on refusal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementVerdict {
    pub ok: bool,
    pub reason: Option<String>,
}

impl From<Result<(), MoveRejection>> for PlacementVerdict {
    fn from(result: Result<(), MoveRejection>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                reason: None,
            },
            Err(rejection) => Self {
                ok: false,
                reason: Some(rejection.to_string()),
            },
        }
    }
}

/// Validate a card against a pile and work out where it goes.
///
/// With no `target_index`, face cards aim at the latest eligible card: a King
/// at the latest live numeric card, a Jack at the latest removable card. A
/// Queen without a target appends.
pub fn resolve_placement(
    card: &Card,
    pile: &Pile,
    actor: Side,
    target: Side,
    target_index: Option<usize>,
) -> Result<Placement, MoveRejection> {
    if actor != target {
        if !card.rank.is_face() {
            return Err(MoveRejection::NumericOnOpponentPile);
        }
        if pile.is_empty() {
            return Err(MoveRejection::OpponentPileEmpty);
        }
    }

    let view = pile.view();

    match card.rank {
        Rank::Ace | Rank::Number(_) => {
            let value = card.rank.pip_value().unwrap_or_default();
            if let (false, Some(direction), Some(last)) =
                (view.accepts_value(value), view.direction, view.last_value)
            {
                return Err(MoveRejection::BreaksDirection {
                    value,
                    last,
                    direction,
                });
            }
            Ok(Placement::append(pile))
        }
        Rank::King => {
            if pile.is_empty() {
                return Err(MoveRejection::EmptyPile(Rank::King));
            }
            match target_index {
                Some(index) => {
                    let aimed = pile.get(index).ok_or(MoveRejection::NoCardAt(index))?;
                    if aimed.is_live() && aimed.is_numeric() {
                        Ok(Placement::after(index))
                    } else {
                        Err(MoveRejection::InvalidKingTarget(index))
                    }
                }
                None => view
                    .king_targets()
                    .last()
                    .map(|&index| Placement::after(index))
                    .ok_or(MoveRejection::NoKingTarget),
            }
        }
        Rank::Jack => {
            if pile.is_empty() {
                return Err(MoveRejection::EmptyPile(Rank::Jack));
            }
            match target_index {
                Some(index) => {
                    let aimed = pile.get(index).ok_or(MoveRejection::NoCardAt(index))?;
                    if aimed.is_live() && aimed.rank != Rank::Jack {
                        Ok(Placement::after(index))
                    } else {
                        Err(MoveRejection::InvalidJackTarget(index))
                    }
                }
                None => view
                    .jack_targets()
                    .last()
                    .map(|&index| Placement::after(index))
                    .ok_or(MoveRejection::NoJackTarget),
            }
        }
        Rank::Queen => match target_index {
            Some(index) if index < pile.len() => Ok(Placement::after(index)),
            Some(index) => Err(MoveRejection::NoCardAt(index)),
            None => Ok(Placement::append(pile)),
        },
    }
}

/// Typed legality check.
pub fn check_placement(
    card: &Card,
    pile: &Pile,
    actor: Side,
    target: Side,
    target_index: Option<usize>,
) -> Result<(), MoveRejection> {
    resolve_placement(card, pile, actor, target, target_index).map(|_| ())
}

/// Legality check in `{ok, reason}` form for hinting.
#[must_use]
pub fn can_place_card_on_target_with_reason(
    card: &Card,
    pile: &Pile,
    actor: Side,
    target: Side,
    target_index: Option<usize>,
) -> PlacementVerdict {
    check_placement(card, pile, actor, target, target_index).into()
}
