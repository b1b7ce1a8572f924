//! A single pile ("caravan") in raw insertion order.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::evaluator::{compute_pile_view, PileView};
use crate::core::card::Card;

/// Ordered cards of one pile.
///
/// Insertion order is the permanent record. Face cards are inserted at a
/// resolved index when played and never move afterwards, so raw order is
/// also the visible and scoring order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pile from cards already in raw order.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Derived view: per-card values, direction and total.
    #[must_use]
    pub fn view(&self) -> PileView {
        compute_pile_view(&self.cards)
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.view().total
    }

    /// Insert at `index`, clamped to the end of the pile.
    pub(crate) fn insert(&mut self, index: usize, card: Card) {
        let index = index.min(self.cards.len());
        self.cards.insert(index, card);
    }

    /// Ghost the card at `index`. Returns false if there is no card there.
    pub(crate) fn mark_removed(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.removed = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{CardId, Rank, Suit};

    fn card(id: u32, rank: Rank) -> Card {
        Card::new(CardId::new(id), Suit::Clubs, rank)
    }

    #[test]
    fn test_insert_and_clamp() {
        let mut pile = Pile::new();
        pile.insert(0, card(1, Rank::Number(4)));
        pile.insert(99, card(2, Rank::Number(6)));
        pile.insert(1, card(3, Rank::King));

        let ranks: Vec<_> = pile.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Number(4), Rank::King, Rank::Number(6)]);
    }

    #[test]
    fn test_mark_removed() {
        let mut pile = Pile::from_cards([card(1, Rank::Number(8))]);

        assert!(pile.mark_removed(0));
        assert!(pile.get(0).unwrap().removed);
        assert!(!pile.mark_removed(5));
        assert_eq!(pile.total(), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Pile::from_cards([card(1, Rank::Number(3))]);
        let mut copy = original.clone();
        copy.insert(1, card(2, Rank::Number(5)));

        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
