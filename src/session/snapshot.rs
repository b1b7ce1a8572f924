//! Read-only, serializable picture of a game for renderers.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameState, Side, SideMap};
use crate::piles::{Pile, PileView, PlayerTotals};
use crate::rules::GameResult;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PileSnapshot {
    /// Raw insertion order.
    pub cards: Vec<Card>,
    pub view: PileView,
    pub total: u32,
}

impl PileSnapshot {
    fn of(pile: &Pile) -> Self {
        let view = pile.view();
        Self {
            cards: pile.iter().copied().collect(),
            total: view.total,
            view,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideSnapshot {
    pub hand: Vec<Card>,
    pub piles: Vec<PileSnapshot>,
    pub totals: PlayerTotals,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub sides: SideMap<SideSnapshot>,
    pub turn: Side,
    pub game_over: bool,
    pub winner: Option<GameResult>,
    pub deck_count: usize,
    pub message: Option<String>,
    pub ai_enabled: bool,
    pub move_count: u32,
}

impl StateSnapshot {
    #[must_use]
    pub fn of(state: &GameState) -> Self {
        let sides = state.boards.map(|_, board| SideSnapshot {
            hand: board.hand.iter().copied().collect(),
            piles: board.piles.iter().map(PileSnapshot::of).collect(),
            totals: board.totals(),
        });
        Self {
            sides,
            turn: state.turn,
            game_over: state.game_over,
            winner: state.winner,
            deck_count: state.deck_len(),
            message: state.message.clone(),
            ai_enabled: state.ai_enabled,
            move_count: state.move_count,
        }
    }
}
