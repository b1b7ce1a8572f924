//! Self-consistency checks over a game state and its move log.
//!
//! The checker never panics and never changes the state. Every violation it
//! finds is collected into the report and logged at `warn`.

use rustc_hash::FxHashSet;
use serde::Serialize;
use thiserror::Error;

use crate::core::{CardId, GameState, Rank, Side, DECK_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum InvariantViolation {
    #[error("moves {index} and {next} were both made by the {actor}")]
    RepeatedActor { index: usize, next: usize, actor: Side },

    #[error("turn is {actual} but the log says it should be {expected}")]
    TurnMismatch { expected: Side, actual: Side },

    #[error("move {index}: a {rank} was played on an empty pile")]
    FaceOnEmptyPile { index: usize, rank: Rank },

    #[error("move {index}: a numeric card was played on the opponent's pile")]
    NumericOnOpponent { index: usize },

    #[error("move {index}: logged turn change {before} -> {after} does not match actor {actor}")]
    BadTurnRecord {
        index: usize,
        actor: Side,
        before: Side,
        after: Side,
    },

    #[error("move {index}: deck grew from {before} to {after}")]
    DeckGrew { index: usize, before: usize, after: usize },

    #[error("deck has {actual} cards but the last move left {logged}")]
    DeckMismatch { logged: usize, actual: usize },

    #[error("move count {count} does not match {logged} logged moves")]
    MoveCountMismatch { count: u32, logged: usize },

    #[error("{found} cards on the table, expected {expected}")]
    CardCount { found: usize, expected: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(CardId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvariantReport {
    pub errors: Vec<InvariantViolation>,
    /// Log entries inspected.
    pub checked: usize,
    pub move_count: u32,
}

impl InvariantReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Side that should be on turn after `moves` commits, given the skips.
fn skip_after(state: &GameState, moves: u32) -> Option<Side> {
    state
        .skips
        .iter()
        .rev()
        .find(|skip| skip.after_moves == moves)
        .map(|skip| skip.side)
}

/// Audit `state`. Always returns a report.
#[must_use]
pub fn run_invariants(state: &GameState) -> InvariantReport {
    let mut errors = Vec::new();
    let log = &state.move_log;

    for (index, entry) in log.iter().enumerate() {
        if matches!(entry.rank, Rank::Jack | Rank::King) && entry.pile_len_before == 0 {
            errors.push(InvariantViolation::FaceOnEmptyPile {
                index,
                rank: entry.rank,
            });
        }
        if entry.actor != entry.target && !entry.rank.is_face() {
            errors.push(InvariantViolation::NumericOnOpponent { index });
        }
        if entry.turn_before != entry.actor || entry.turn_after != entry.actor.opponent() {
            errors.push(InvariantViolation::BadTurnRecord {
                index,
                actor: entry.actor,
                before: entry.turn_before,
                after: entry.turn_after,
            });
        }
    }

    for (index, (prev, next)) in log.iter().zip(log.iter().skip(1)).enumerate() {
        // A pass by the other side in between explains a repeat.
        let moves_so_far = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let explained = skip_after(state, moves_so_far) == Some(prev.actor.opponent());
        if prev.actor == next.actor && !explained {
            errors.push(InvariantViolation::RepeatedActor {
                index,
                next: index + 1,
                actor: next.actor,
            });
        }
        if next.deck_len_after > prev.deck_len_after {
            errors.push(InvariantViolation::DeckGrew {
                index: index + 1,
                before: prev.deck_len_after,
                after: next.deck_len_after,
            });
        }
    }

    if let Some(last) = log.last() {
        if last.deck_len_after != state.deck_len() {
            errors.push(InvariantViolation::DeckMismatch {
                logged: last.deck_len_after,
                actual: state.deck_len(),
            });
        }
    }

    if !state.game_over {
        let expected = match skip_after(state, state.move_count) {
            Some(skipper) => skipper.opponent(),
            None => log.last().map_or(Side::Player, |last| last.turn_after),
        };
        if state.turn != expected {
            errors.push(InvariantViolation::TurnMismatch {
                expected,
                actual: state.turn,
            });
        }
    }

    if usize::try_from(state.move_count).ok() != Some(log.len()) {
        errors.push(InvariantViolation::MoveCountMismatch {
            count: state.move_count,
            logged: log.len(),
        });
    }

    let mut seen = FxHashSet::default();
    let mut found = 0;
    for id in state.all_card_ids() {
        found += 1;
        if !seen.insert(id) {
            errors.push(InvariantViolation::DuplicateCard(id));
        }
    }
    if found != DECK_SIZE {
        errors.push(InvariantViolation::CardCount {
            found,
            expected: DECK_SIZE,
        });
    }

    for violation in &errors {
        tracing::warn!(%violation, "invariant violated");
    }

    InvariantReport {
        errors,
        checked: log.len(),
        move_count: state.move_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::generator::enumerate_candidates;
    use crate::core::{GameConfig, GameRng};
    use crate::rules::CaravanRules;

    fn played(moves: usize) -> GameState {
        let rules = CaravanRules::new(GameConfig::default());
        let mut state = rules.new_game(&mut GameRng::new(21));
        for _ in 0..moves {
            let side = state.turn;
            match enumerate_candidates(&state, side).first() {
                Some(&mv) => state = rules.place_card(&state, mv),
                None => state = rules.skip_turn(&state, side, "pass"),
            }
        }
        state
    }

    #[test]
    fn test_fresh_game_is_clean() {
        let report = run_invariants(&played(0));
        assert!(report.is_clean(), "{:?}", report.errors);
        assert_eq!(report.checked, 0);
    }

    #[test]
    fn test_played_game_is_clean() {
        let state = played(12);
        let report = run_invariants(&state);
        assert!(report.is_clean(), "{:?}", report.errors);
        assert_eq!(report.checked, state.move_log.len());
    }

    #[test]
    fn test_skip_explains_repeat() {
        let rules = CaravanRules::new(GameConfig::default());
        let mut state = played(1);
        state = rules.skip_turn(&state, Side::Ai, "pass");
        let mv = enumerate_candidates(&state, Side::Player)[0];
        state = rules.place_card(&state, mv);

        assert_eq!(state.move_log.len(), 2);
        assert!(run_invariants(&state).is_clean());
    }

    #[test]
    fn test_detects_tampering() {
        let mut state = played(4);
        state.turn = state.turn.opponent();
        state.move_count += 1;
        let dup = state.deck[0];
        state.deck.push_back(dup);

        let errors = run_invariants(&state).errors;
        let found = |f: fn(&InvariantViolation) -> bool| errors.iter().any(f);
        assert!(found(|e| matches!(e, InvariantViolation::TurnMismatch { .. })));
        assert!(found(|e| matches!(e, InvariantViolation::MoveCountMismatch { .. })));
        assert!(found(|e| matches!(e, InvariantViolation::CardCount { found: 53, .. })));
        assert!(found(|e| matches!(e, InvariantViolation::DeckMismatch { .. })));
        assert!(errors.contains(&InvariantViolation::DuplicateCard(dup.id)));
    }

    #[test]
    fn test_detects_face_card_on_empty_pile() {
        let mut state = played(3);
        state.move_log[0].rank = Rank::Jack;
        state.move_log[0].pile_len_before = 0;

        let errors = run_invariants(&state).errors;
        assert!(errors.contains(&InvariantViolation::FaceOnEmptyPile {
            index: 0,
            rank: Rank::Jack,
        }));
    }

    #[test]
    fn test_detects_numeric_on_opponent_pile() {
        let mut state = played(3);
        let entry = &mut state.move_log[1];
        entry.rank = Rank::Number(7);
        entry.target = entry.actor.opponent();

        let errors = run_invariants(&state).errors;
        assert!(errors.contains(&InvariantViolation::NumericOnOpponent { index: 1 }));
    }

    #[test]
    fn test_detects_bad_turn_record() {
        let mut state = played(3);
        let actor = state.move_log[2].actor;
        state.move_log[2].turn_after = actor;

        let errors = run_invariants(&state).errors;
        assert!(errors.contains(&InvariantViolation::BadTurnRecord {
            index: 2,
            actor,
            before: actor,
            after: actor,
        }));
    }

    #[test]
    fn test_detects_growing_deck() {
        let mut state = played(3);
        state.move_log[1].deck_len_after = state.move_log[0].deck_len_after + 5;

        let errors = run_invariants(&state).errors;
        assert!(errors
            .iter()
            .any(|e| matches!(e, InvariantViolation::DeckGrew { index: 1, .. })));
    }

    #[test]
    fn test_detects_repeated_actor() {
        let mut state = played(3);
        let first_actor = state.move_log[0].actor;
        state.move_log[1].actor = first_actor;

        let errors = run_invariants(&state).errors;
        assert!(errors
            .iter()
            .any(|e| matches!(e, InvariantViolation::RepeatedActor { index: 0, .. })));
    }
}
