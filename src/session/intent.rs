//! Move intents from the input layer.
//!
//! A drag starts with a payload naming where the card came from and ends on a
//! drop target. Anything that does not describe a card leaving its owner's
//! hand for one of the three piles of a side is refused here, before the
//! rules ever see it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CardId, PlaceCard, Side};
use crate::piles::PILES_PER_SIDE;

/// Where a dragged card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentSource {
    Hand,
    Pile,
}

/// Drag payload: `{"source": "hand", "owner": "player", "cardId": 7}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveIntent {
    pub source: IntentSource,
    pub owner: Side,
    pub card_id: CardId,
}

impl MoveIntent {
    #[must_use]
    pub fn from_hand(owner: Side, card_id: CardId) -> Self {
        Self {
            source: IntentSource::Hand,
            owner,
            card_id,
        }
    }
}

/// Where the card was dropped: a pile container, or a card inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub side: Side,
    pub pile_index: usize,
    #[serde(default)]
    pub card_index: Option<usize>,
}

impl DropTarget {
    #[must_use]
    pub fn pile(side: Side, pile_index: usize) -> Self {
        Self {
            side,
            pile_index,
            card_index: None,
        }
    }

    #[must_use]
    pub fn card(side: Side, pile_index: usize, card_index: usize) -> Self {
        Self {
            side,
            pile_index,
            card_index: Some(card_index),
        }
    }
}

#[derive(Debug, Error)]
pub enum IntentError {
    #[error("malformed move intent: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("cards can only be played from a hand")]
    NotFromHand,

    #[error("pile {0} does not exist")]
    NoSuchPile(usize),
}

/// Turn an intent and its drop target into a move.
pub fn intent_to_move(intent: &MoveIntent, drop: &DropTarget) -> Result<PlaceCard, IntentError> {
    if intent.source != IntentSource::Hand {
        return Err(IntentError::NotFromHand);
    }
    if drop.pile_index >= PILES_PER_SIDE {
        return Err(IntentError::NoSuchPile(drop.pile_index));
    }
    let mv = PlaceCard::new(intent.owner, drop.side, intent.card_id, drop.pile_index);
    Ok(match drop.card_index {
        Some(index) => mv.targeting(index),
        None => mv,
    })
}

/// Parse a JSON drag payload.
pub fn parse_intent(json: &str) -> Result<MoveIntent, IntentError> {
    Ok(serde_json::from_str(json)?)
}
