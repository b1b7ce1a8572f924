//! The game state machine.
//!
//! `CaravanRules` is a pure reducer: every call takes a `GameState` by
//! reference and returns the next one. `place_card` is the only way a move
//! is ever committed, for the human and the AI alike.
//!
//! States are `in-progress` and `game-over`. After each commit both sides
//! are checked at once: a side wins when all three of its pile totals fall
//! in the win range. If both qualify together the higher grand total wins
//! and equal grand totals tie.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::error::MoveRejection;
use super::validator::{resolve_placement, Placement};
use crate::core::deck::draw_one;
use crate::core::{
    Card, GameConfig, GameRng, GameState, MoveLogEntry, PlaceCard, Rank, Side, SkipRecord,
};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Both sides qualified with equal grand totals.
    Tie,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Caravan rules bound to one table configuration.
#[derive(Clone, Debug, Default)]
pub struct CaravanRules {
    config: GameConfig,
}

impl CaravanRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh shuffle and deal.
    #[must_use]
    pub fn new_game(&self, rng: &mut GameRng) -> GameState {
        GameState::deal(&self.config, rng)
    }

    /// Every precondition of a commit, without committing.
    ///
    /// Game still running, actor's turn, pile exists, card in hand, and the
    /// validator accepts it. Returns the card and where it would land.
    fn preflight(
        &self,
        state: &GameState,
        mv: PlaceCard,
    ) -> Result<(Card, Placement), MoveRejection> {
        if state.game_over {
            return Err(MoveRejection::GameOver);
        }
        if state.turn != mv.actor {
            return Err(MoveRejection::NotYourTurn {
                expected: state.turn,
                actor: mv.actor,
            });
        }
        let pile = state
            .pile(mv.target, mv.pile_index)
            .ok_or(MoveRejection::NoSuchPile(mv.pile_index))?;
        let card = state
            .card_in_hand(mv.actor, mv.card_id)
            .ok_or(MoveRejection::CardNotInHand {
                side: mv.actor,
                card: mv.card_id,
            })?;
        let placement = resolve_placement(&card, pile, mv.actor, mv.target, mv.target_index)?;
        Ok((card, placement))
    }

    /// Whether `mv` would be accepted right now.
    pub fn check_move(&self, state: &GameState, mv: PlaceCard) -> Result<(), MoveRejection> {
        self.preflight(state, mv).map(|_| ())
    }

    /// Commit a move, or explain why not.
    ///
    /// On success the card leaves the actor's hand, lands in the pile, the
    /// actor draws if the deck has cards, the turn passes and the move is
    /// logged. On failure nothing is produced.
    pub fn try_place_card(
        &self,
        state: &GameState,
        mv: PlaceCard,
    ) -> Result<GameState, MoveRejection> {
        let (card, placement) = self.preflight(state, mv)?;
        let pile_len_before = state.pile(mv.target, mv.pile_index).map_or(0, |p| p.len());

        let mut next = state.clone();

        let board = &mut next.boards[mv.actor];
        if let Some(pos) = board.hand_position(card.id) {
            board.hand.remove(pos);
        }

        let pile = &mut next.boards[mv.target].piles[mv.pile_index];
        pile.insert(placement.insert_index, card);
        if card.rank == Rank::Jack {
            // Jacks land after their target, so the target index is unchanged.
            if let Some(target) = placement.target_index {
                pile.mark_removed(target);
            }
        }

        let (drawn, deck) = draw_one(&next.deck);
        next.deck = deck;
        if let Some(drawn) = drawn {
            next.boards[mv.actor].hand.push_back(drawn);
        }

        next.turn = mv.actor.opponent();
        next.move_count += 1;
        next.message = None;
        next.move_log.push_back(MoveLogEntry {
            actor: mv.actor,
            target: mv.target,
            card_id: card.id,
            rank: card.rank,
            pile_index: mv.pile_index,
            target_index: placement.target_index,
            insert_index: placement.insert_index,
            pile_len_before,
            turn_before: mv.actor,
            turn_after: next.turn,
            deck_len_after: next.deck.len(),
            timestamp: Utc::now(),
        });

        tracing::info!(
            actor = %mv.actor,
            target = %mv.target,
            card = %card.rank,
            pile = mv.pile_index,
            at = placement.insert_index,
            moves = next.move_count,
            "card placed"
        );

        if let Some(result) = self.outcome(&next) {
            next.game_over = true;
            next.winner = Some(result);
            tracing::info!(?result, moves = next.move_count, "game over");
        }

        Ok(next)
    }

    /// Commit a move. A refused move returns the same state carrying the
    /// rejection message and nothing else changed.
    #[must_use]
    pub fn place_card(&self, state: &GameState, mv: PlaceCard) -> GameState {
        match self.try_place_card(state, mv) {
            Ok(next) => next,
            Err(rejection) => {
                tracing::debug!(actor = %mv.actor, card = %mv.card_id, %rejection, "move rejected");
                state.with_message(rejection.to_string())
            }
        }
    }

    /// Pass `side`'s turn without a move: no draw, no log entry, no count.
    ///
    /// Ignored unless it is `side`'s turn in a running game.
    #[must_use]
    pub fn skip_turn(&self, state: &GameState, side: Side, reason: &str) -> GameState {
        if state.game_over || state.turn != side {
            return state.clone();
        }
        let mut next = state.clone();
        next.turn = side.opponent();
        next.message = Some(reason.to_string());
        next.skips.push_back(SkipRecord {
            side,
            after_moves: state.move_count,
            timestamp: Utc::now(),
        });
        tracing::info!(%side, moves = state.move_count, "turn skipped");
        next
    }

    /// Check the end condition. Returns `None` while the game continues.
    #[must_use]
    pub fn outcome(&self, state: &GameState) -> Option<GameResult> {
        let player = state.totals(Side::Player);
        let ai = state.totals(Side::Ai);
        let qualifies = |t: u32| self.config.qualifies(t);

        match (player.all_piles(qualifies), ai.all_piles(qualifies)) {
            (false, false) => None,
            (true, false) => Some(GameResult::Winner(Side::Player)),
            (false, true) => Some(GameResult::Winner(Side::Ai)),
            (true, true) => Some(match player.grand.cmp(&ai.grand) {
                std::cmp::Ordering::Greater => GameResult::Winner(Side::Player),
                std::cmp::Ordering::Less => GameResult::Winner(Side::Ai),
                std::cmp::Ordering::Equal => GameResult::Tie,
            }),
        }
    }
}
