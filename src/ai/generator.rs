//! Legal move enumeration for the automated side.
//!
//! Every card in hand is tried against every pile it may go on: numeric
//! cards on the side's own three piles, face cards on all six. Face cards
//! aim at the latest eligible card of the pile (a King at the latest live
//! numeric card, a Jack at the latest removable one) and Queens append.
//! Only moves the validator accepts are returned.

use super::strategy::MoveStrategy;
use crate::core::{GameRng, GameState, PlaceCard, Side};
use crate::piles::PILES_PER_SIDE;
use crate::rules::resolve_placement;

/// All legal moves for `side` in `state`, in hand order.
///
/// Turn and game-over are not considered here; callers decide when the side
/// may act.
#[must_use]
pub fn enumerate_candidates(state: &GameState, side: Side) -> Vec<PlaceCard> {
    let mut candidates = Vec::new();

    for card in state.hand(side).iter() {
        for target in [side, side.opponent()] {
            if target != side && !card.rank.is_face() {
                continue;
            }
            for pile_index in 0..PILES_PER_SIDE {
                let Some(pile) = state.pile(target, pile_index) else {
                    continue;
                };
                if let Ok(placement) = resolve_placement(card, pile, side, target, None) {
                    let mut mv = PlaceCard::new(side, target, card.id, pile_index);
                    mv.target_index = placement.target_index;
                    candidates.push(mv);
                }
            }
        }
    }

    tracing::debug!(%side, count = candidates.len(), "enumerated candidate moves");
    candidates
}

/// Enumerate and let `strategy` pick. `None` means no legal move.
pub fn propose_move<S: MoveStrategy + ?Sized>(
    state: &GameState,
    side: Side,
    strategy: &S,
    rng: &mut GameRng,
) -> Option<PlaceCard> {
    let candidates = enumerate_candidates(state, side);
    strategy
        .choose(&candidates, state, rng)
        .filter(|mv| candidates.contains(mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::strategy::FirstLegalStrategy;
    use crate::core::{Board, Card, CardId, GameConfig, Rank, SideMap, Suit};
    use crate::piles::Pile;
    use crate::rules::CaravanRules;

    fn card(id: u32, rank: Rank) -> Card {
        Card::new(CardId::new(id), Suit::Clubs, rank)
    }

    fn ai_table(ai_hand: Vec<Card>) -> GameState {
        let mut boards: SideMap<Board> = SideMap::default();
        boards[Side::Ai] = Board::with_hand(ai_hand.into_iter().collect());
        let mut state = GameState::from_parts(boards, Default::default(), true);
        state.turn = Side::Ai;
        state
    }

    #[test]
    fn test_numeric_cards_only_on_own_piles() {
        let state = ai_table(vec![card(1, Rank::Number(5))]);
        let moves = enumerate_candidates(&state, Side::Ai);

        assert_eq!(moves.len(), 3);
        assert!(moves.iter().all(|m| m.target == Side::Ai && m.target_index.is_none()));
    }

    #[test]
    fn test_face_cards_need_started_piles() {
        let mut state = ai_table(vec![
            card(1, Rank::King),
            card(2, Rank::Jack),
            card(3, Rank::Queen),
        ]);
        assert_eq!(
            enumerate_candidates(&state, Side::Ai)
                .iter()
                .map(|m| m.card_id)
                .collect::<Vec<_>>(),
            vec![CardId::new(3); 3],
            "only the Queen fits empty own piles"
        );

        state.boards[Side::Player].piles[2] =
            Pile::from_cards([card(10, Rank::Number(4)), card(11, Rank::Number(7))]);
        let moves = enumerate_candidates(&state, Side::Ai);

        let king = moves
            .iter()
            .find(|m| m.card_id == CardId::new(1))
            .unwrap();
        assert_eq!((king.target, king.pile_index, king.target_index), (Side::Player, 2, Some(1)));

        let jack = moves
            .iter()
            .find(|m| m.card_id == CardId::new(2))
            .unwrap();
        assert_eq!((jack.target, jack.pile_index, jack.target_index), (Side::Player, 2, Some(1)));

        let queens = moves.iter().filter(|m| m.card_id == CardId::new(3)).count();
        assert_eq!(queens, 4);
    }

    #[test]
    fn test_blocked_hand_has_no_candidates() {
        let mut state = ai_table(vec![card(1, Rank::Number(3))]);
        for pile in state.boards[Side::Ai].piles.iter_mut() {
            *pile = Pile::from_cards([card(20, Rank::Number(2)), card(21, Rank::Number(9))]);
        }
        assert!(enumerate_candidates(&state, Side::Ai).is_empty());

        let mut rng = GameRng::new(0);
        assert!(propose_move(&state, Side::Ai, &FirstLegalStrategy, &mut rng).is_none());
    }

    #[test]
    fn test_every_candidate_commits() {
        let rules = CaravanRules::new(GameConfig::default());
        let mut state = ai_table(vec![
            card(1, Rank::Number(5)),
            card(2, Rank::King),
            card(3, Rank::Jack),
            card(4, Rank::Queen),
        ]);
        state.boards[Side::Ai].piles[0] = Pile::from_cards([card(10, Rank::Number(6))]);
        state.boards[Side::Player].piles[1] = Pile::from_cards([card(11, Rank::Ace)]);

        for mv in enumerate_candidates(&state, Side::Ai) {
            assert!(rules.try_place_card(&state, mv).is_ok(), "{mv:?} should commit");
        }
    }
}
