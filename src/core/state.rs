//! Game state: both boards, the shared deck, turn and the move log.
//!
//! ## Board
//!
//! One side's hand plus its three piles.
//!
//! ## GameState
//!
//! A complete, self-contained game value. All collections are `im`
//! persistent structures, so the engine produces each new state by cloning
//! (O(1), structurally shared) and editing the clone. A state that has been
//! handed out is never edited in place.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{MoveLogEntry, SkipRecord};
use super::card::{Card, CardId};
use super::config::GameConfig;
use super::deck::{create_shuffled_deck, deal_cards};
use super::rng::GameRng;
use super::side::{Side, SideMap};
use crate::piles::{compute_player_totals, Pile, PlayerTotals, PILES_PER_SIDE};
use crate::rules::GameResult;

/// One side's hand and piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cards in draw order.
    pub hand: Vector<Card>,
    pub piles: [Pile; PILES_PER_SIDE],
}

impl Board {
    #[must_use]
    pub fn with_hand(hand: Vector<Card>) -> Self {
        Self {
            hand,
            piles: Default::default(),
        }
    }

    /// Position of a card in hand.
    #[must_use]
    pub fn hand_position(&self, id: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == id)
    }

    #[must_use]
    pub fn pile(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    #[must_use]
    pub fn totals(&self) -> PlayerTotals {
        compute_player_totals(&self.piles)
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub boards: SideMap<Board>,

    /// Shared draw deck, drawn from the front.
    pub deck: Vector<Card>,

    /// Side to move.
    pub turn: Side,

    pub ai_enabled: bool,

    pub game_over: bool,

    /// Set together with `game_over`.
    pub winner: Option<GameResult>,

    /// Committed moves so far.
    pub move_count: u32,

    /// Append-only record of committed moves.
    pub move_log: Vector<MoveLogEntry>,

    /// Turns the AI passed without a legal move.
    #[serde(default)]
    pub skips: Vector<SkipRecord>,

    /// Last rejection or skip notice for the UI. Cleared by the next commit.
    pub message: Option<String>,
}

impl GameState {
    /// Shuffle a fresh deck and deal both opening hands.
    ///
    /// The human side moves first.
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        let deck = create_shuffled_deck(rng);
        let (player_hand, deck) = deal_cards(&deck, config.hand_size);
        let (ai_hand, deck) = deal_cards(&deck, config.hand_size);

        let mut boards: SideMap<Board> = SideMap::default();
        boards[Side::Player] = Board::with_hand(player_hand);
        boards[Side::Ai] = Board::with_hand(ai_hand);

        Self::from_parts(boards, deck, config.ai_enabled)
    }

    /// Assemble a state at move zero from prepared boards and deck.
    #[must_use]
    pub fn from_parts(boards: SideMap<Board>, deck: Vector<Card>, ai_enabled: bool) -> Self {
        Self {
            boards,
            deck,
            turn: Side::Player,
            ai_enabled,
            game_over: false,
            winner: None,
            move_count: 0,
            move_log: Vector::new(),
            skips: Vector::new(),
            message: None,
        }
    }

    #[must_use]
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side]
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Vector<Card> {
        &self.boards[side].hand
    }

    #[must_use]
    pub fn pile(&self, side: Side, index: usize) -> Option<&Pile> {
        self.boards[side].pile(index)
    }

    #[must_use]
    pub fn totals(&self, side: Side) -> PlayerTotals {
        self.boards[side].totals()
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The card `side` holds with this id.
    #[must_use]
    pub fn card_in_hand(&self, side: Side, id: CardId) -> Option<Card> {
        self.boards[side].hand.iter().find(|c| c.id == id).copied()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveLogEntry> {
        self.move_log.last()
    }

    /// Same state with a notice attached.
    #[must_use]
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.message = Some(message.into());
        next
    }

    /// Every card id on the table: deck, both hands, all six piles.
    pub fn all_card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        let hands = Side::ALL
            .into_iter()
            .flat_map(move |side| self.boards[side].hand.iter());
        let piles = Side::ALL
            .into_iter()
            .flat_map(move |side| self.boards[side].piles.iter().flat_map(Pile::iter));
        self.deck.iter().chain(hands).chain(piles).map(|c| c.id)
    }
}
