//! Table sides and per-side data storage.
//!
//! ## Side
//!
//! Caravan is strictly two-sided: the human `Player` and the automated `Ai`.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, so board data is addressed as
//! `boards[Side::Ai]` instead of by raw index.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Ai];

    /// The other seat.
    ///
    /// ```
    /// use caravan_engine::core::Side;
    ///
    /// assert_eq!(Side::Player.opponent(), Side::Ai);
    /// assert_eq!(Side::Ai.opponent(), Side::Player);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Storage slot (0 for the human, 1 for the AI).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Ai => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Ai => write!(f, "ai"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use caravan_engine::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::default();
/// scores[Side::Ai] = 24;
///
/// assert_eq!(scores[Side::Player], 0);
/// assert_eq!(scores[Side::Ai], 24);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    player: T,
    ai: T,
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            ai: factory(Side::Ai),
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// Iterate over (Side, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Ai, &self.ai)].into_iter()
    }

    /// Apply `f` to both entries.
    pub fn map<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> SideMap<U> {
        SideMap {
            player: f(Side::Player, &self.player),
            ai: f(Side::Ai, &self.ai),
        }
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
