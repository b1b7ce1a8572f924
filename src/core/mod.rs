//! Core game types: cards, deck, sides, configuration, moves and state.
//!
//! These are plain data with no rules attached. Legality and state
//! transitions live in `rules`; scoring lives in `piles`.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{MoveLogEntry, PlaceCard, SkipRecord};
pub use card::{Card, CardId, Color, Rank, Suit, DECK_SIZE};
pub use config::{ConfigError, GameConfig};
pub use deck::{create_shuffled_deck, deal_cards, draw_one};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::{Board, GameState};
