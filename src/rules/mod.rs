//! Caravan rules: move legality and the state machine.
//!
//! - `validator`: read-only legality checks shared by commits, hints and AI
//! - `engine`: the reducer that commits moves and detects the end of the game
//! - `error`: why a move was refused

pub mod engine;
pub mod error;
pub mod validator;

pub use engine::{CaravanRules, GameResult};
pub use error::MoveRejection;
pub use validator::{
    can_place_card_on_target_with_reason, check_placement, resolve_placement, Placement,
    PlacementVerdict,
};
