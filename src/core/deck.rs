//! Shared draw deck: construction, shuffle, deal and draw.
//!
//! The deck is an `im::Vector` drawn from the front. Every operation returns
//! the remaining deck as a new value; the input is left untouched, so callers
//! holding an older state never observe a draw.

use im::Vector;

use super::card::{Card, CardId, DECK_SIZE};
use super::rng::GameRng;

/// Build a standard 52-card deck and shuffle it uniformly.
#[must_use]
pub fn create_shuffled_deck(rng: &mut GameRng) -> Vector<Card> {
    let mut cards: Vec<Card> = (0..DECK_SIZE as u32)
        .filter_map(|id| Card::from_id(CardId::new(id)))
        .collect();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

/// Take the first `n` cards. Returns `(dealt, remaining)`.
///
/// A short deck deals whatever it has.
#[must_use]
pub fn deal_cards(deck: &Vector<Card>, n: usize) -> (Vector<Card>, Vector<Card>) {
    let mut dealt = deck.clone();
    let remaining = dealt.split_off(n.min(deck.len()));
    (dealt, remaining)
}

/// Take the front card. Returns `(card, remaining)`; an empty deck yields
/// `None` and stays empty.
#[must_use]
pub fn draw_one(deck: &Vector<Card>) -> (Option<Card>, Vector<Card>) {
    let mut remaining = deck.clone();
    let card = remaining.pop_front();
    (card, remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_fresh_deck_is_complete() {
        let mut rng = GameRng::new(42);
        let deck = create_shuffled_deck(&mut rng);

        assert_eq!(deck.len(), DECK_SIZE);
        let ids: FxHashSet<CardId> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
        assert!(deck.iter().all(|c| !c.removed));
    }

    #[test]
    fn test_shuffles_are_independent() {
        let mut rng = GameRng::new(42);
        let first = create_shuffled_deck(&mut rng);
        let second = create_shuffled_deck(&mut rng);

        assert_ne!(first, second);
    }

    #[test]
    fn test_deal_cards() {
        let mut rng = GameRng::new(1);
        let deck = create_shuffled_deck(&mut rng);

        let (hand, rest) = deal_cards(&deck, 5);
        assert_eq!(hand.len(), 5);
        assert_eq!(rest.len(), 47);
        assert_eq!(hand[0], deck[0]);
        assert_eq!(rest[0], deck[5]);
        // Source deck untouched.
        assert_eq!(deck.len(), DECK_SIZE);
    }

    #[test]
    fn test_deal_more_than_available() {
        let mut rng = GameRng::new(1);
        let (_, short) = deal_cards(&create_shuffled_deck(&mut rng), 49);
        assert_eq!(short.len(), 3);

        let (dealt, rest) = deal_cards(&short, 5);
        assert_eq!(dealt.len(), 3);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_draw_one() {
        let mut rng = GameRng::new(3);
        let deck = create_shuffled_deck(&mut rng);

        let (card, rest) = draw_one(&deck);
        assert_eq!(card, Some(deck[0]));
        assert_eq!(rest.len(), DECK_SIZE - 1);
    }

    #[test]
    fn test_draw_from_empty() {
        let empty: Vector<Card> = Vector::new();
        let (card, rest) = draw_one(&empty);

        assert!(card.is_none());
        assert!(rest.is_empty());
    }
}
