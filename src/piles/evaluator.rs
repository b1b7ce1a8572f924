//! Pile evaluation: values, King multipliers, direction and totals.
//!
//! Everything here is a pure fold over a pile's raw history. Nothing is
//! cached on the pile, so a view can never drift from the cards it was
//! computed from.
//!
//! ## Values
//!
//! - Ace = 1, 2-10 = pip value, Jack/Queen = 0
//! - A King binds to the nearest preceding numeric card (its slot) and
//!   doubles it. Kings on the same slot stack: x2, x4, x8.
//! - Ghosted cards count zero, whatever multiplier is bound to them.
//!
//! ## Direction
//!
//! Live numeric values are scanned in raw order. The first two distinct
//! consecutive values fix ascending or descending; repeated values never set
//! or extend a direction. A live Queen reverses whatever direction is active
//! at that point.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pile::Pile;
use crate::core::card::{Card, Rank};

/// Number of piles each side plays.
pub const PILES_PER_SIDE: usize = 3;

/// Indices of candidate target cards within a pile.
pub type TargetIndices = SmallVec<[usize; 8]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Direction implied by moving from `from` to `to`, if they differ.
    #[must_use]
    pub fn between(from: u32, to: u32) -> Option<Self> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Direction::Ascending),
            std::cmp::Ordering::Less => Some(Direction::Descending),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Whether `next` strictly continues this direction after `last`.
    #[must_use]
    pub fn admits(self, last: u32, next: u32) -> bool {
        Direction::between(last, next) == Some(self)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

/// One card of a pile with its derived scoring data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PileEntry {
    pub card: Card,
    /// Live numeric card that contributes to the total.
    pub counts: bool,
    /// Product of live Kings bound to this slot (1 for face cards).
    pub multiplier: u32,
    /// Contribution to the total.
    pub value: u32,
}

/// Derived, read-only view of a pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PileView {
    /// Entries in visible order (same as raw order).
    pub entries: Vec<PileEntry>,
    pub direction: Option<Direction>,
    /// Latest live numeric value.
    pub last_value: Option<u32>,
    pub live_numeric_count: usize,
    pub total: u32,
}

impl PileView {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether appending a numeric card of `value` keeps the direction.
    #[must_use]
    pub fn accepts_value(&self, value: u32) -> bool {
        match (self.direction, self.last_value) {
            (Some(direction), Some(last)) => direction.admits(last, value),
            _ => true,
        }
    }

    /// Cards a King may target: live numeric cards.
    #[must_use]
    pub fn king_targets(&self) -> TargetIndices {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.card.is_live() && e.card.is_numeric())
            .map(|(i, _)| i)
            .collect()
    }

    /// Cards a Jack may target: live cards other than Jacks.
    #[must_use]
    pub fn jack_targets(&self) -> TargetIndices {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.card.is_live() && e.card.rank != Rank::Jack)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Evaluate a pile from its raw cards.
pub fn compute_pile_view<'a, I>(raw: I) -> PileView
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut entries: Vec<PileEntry> = Vec::new();
    let mut slot: Option<usize> = None;
    let mut direction: Option<Direction> = None;
    let mut last_value: Option<u32> = None;
    let mut live_numeric_count = 0;

    for card in raw {
        let index = entries.len();
        entries.push(PileEntry {
            card: *card,
            counts: false,
            multiplier: 1,
            value: 0,
        });

        match (card.rank, card.rank.pip_value()) {
            (_, Some(value)) => {
                // A numeric card opens a new slot even when ghosted.
                slot = Some(index);
                if card.removed {
                    continue;
                }
                live_numeric_count += 1;
                if let Some(last) = last_value {
                    if direction.is_none() {
                        direction = Direction::between(last, value);
                    }
                }
                last_value = Some(value);
            }
            (Rank::King, None) if card.is_live() => {
                if let Some(s) = slot {
                    entries[s].multiplier = entries[s].multiplier.saturating_mul(2);
                }
            }
            (Rank::Queen, None) if card.is_live() => {
                direction = direction.map(Direction::reversed);
            }
            _ => {}
        }
    }

    let mut total: u32 = 0;
    for entry in &mut entries {
        if let (true, Some(pip)) = (entry.card.is_live(), entry.card.rank.pip_value()) {
            entry.counts = true;
            entry.value = pip.saturating_mul(entry.multiplier);
            total = total.saturating_add(entry.value);
        }
    }

    PileView {
        entries,
        direction,
        last_value,
        live_numeric_count,
        total,
    }
}

/// Per-pile and grand totals for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTotals {
    pub piles: [u32; PILES_PER_SIDE],
    pub grand: u32,
}

impl PlayerTotals {
    /// All three piles satisfy `qualifies`.
    pub fn all_piles(&self, qualifies: impl Fn(u32) -> bool) -> bool {
        self.piles.iter().all(|&t| qualifies(t))
    }
}

/// Totals for a side's three piles.
#[must_use]
pub fn compute_player_totals(piles: &[Pile; PILES_PER_SIDE]) -> PlayerTotals {
    let mut totals = PlayerTotals::default();
    for (slot, pile) in totals.piles.iter_mut().zip(piles.iter()) {
        *slot = pile.total();
        totals.grand = totals.grand.saturating_add(*slot);
    }
    totals
}
