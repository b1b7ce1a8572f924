//! Playing cards: identity, suit, rank and the ghosted flag.
//!
//! A standard 52-card deck is encoded with ids `0..52`:
//! - suit = id / 13
//! - rank = id % 13 (0 = Ace, 12 = King)
//!
//! Ids are assigned once at deck construction and never change, so a card can
//! be tracked across deck, hand and pile by id alone.

use serde::{Deserialize, Serialize};

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Ranks per suit.
pub const RANKS_PER_SUIT: u32 = 13;

/// Unique card identifier within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// Card rank. Numeric ranks carry their pip value; Ace counts as 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Number(u8),
    Jack,
    Queen,
    King,
}

impl Rank {
    fn from_offset(offset: u32) -> Self {
        match offset {
            0 => Rank::Ace,
            10 => Rank::Jack,
            11 => Rank::Queen,
            12 => Rank::King,
            n => Rank::Number(n as u8 + 1),
        }
    }

    /// Face value used in pile sums and direction checks.
    ///
    /// Returns `None` for face cards, which carry no value of their own.
    #[must_use]
    pub const fn pip_value(self) -> Option<u32> {
        match self {
            Rank::Ace => Some(1),
            Rank::Number(n) => Some(n as u32),
            Rank::Jack | Rank::Queen | Rank::King => None,
        }
    }

    /// Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Short label ("A", "7", "K").
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Rank::Ace => "A".to_string(),
            Rank::Number(n) => n.to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// A card as it sits in a deck, hand or pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    /// Ghosted by a Jack. Set once, never cleared.
    #[serde(default)]
    pub removed: bool,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            removed: false,
        }
    }

    /// Build the card for a deck id in `0..52`.
    ///
    /// Returns `None` for ids outside the deck.
    #[must_use]
    pub fn from_id(id: CardId) -> Option<Self> {
        if id.0 as usize >= DECK_SIZE {
            return None;
        }
        Some(Self {
            id,
            suit: Suit::ALL[(id.0 / RANKS_PER_SUIT) as usize],
            rank: Rank::from_offset(id.0 % RANKS_PER_SUIT),
            removed: false,
        })
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Not ghosted.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        !self.removed
    }

    /// Ace or 2-10.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !self.rank.is_face()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_from_id() {
        let ace = Card::from_id(CardId::new(0)).unwrap();
        assert_eq!(ace.suit, Suit::Hearts);
        assert_eq!(ace.rank, Rank::Ace);
        assert_eq!(ace.color(), Color::Red);

        let ten = Card::from_id(CardId::new(9)).unwrap();
        assert_eq!(ten.rank, Rank::Number(10));

        let king_of_spades = Card::from_id(CardId::new(51)).unwrap();
        assert_eq!(king_of_spades.suit, Suit::Spades);
        assert_eq!(king_of_spades.rank, Rank::King);
        assert_eq!(king_of_spades.color(), Color::Black);

        assert!(Card::from_id(CardId::new(52)).is_none());
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.pip_value(), Some(1));
        assert_eq!(Rank::Number(7).pip_value(), Some(7));
        assert_eq!(Rank::Jack.pip_value(), None);
        assert_eq!(Rank::Queen.pip_value(), None);
        assert_eq!(Rank::King.pip_value(), None);

        assert!(Rank::King.is_face());
        assert!(!Rank::Ace.is_face());
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(Rank::Ace.to_string(), "A");
        assert_eq!(Rank::Number(10).to_string(), "10");
        assert_eq!(Rank::Queen.to_string(), "Q");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::from_id(CardId::new(23)).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
