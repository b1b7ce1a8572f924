//! The game session: one table, its RNG streams and the AI decision token.
//!
//! Renderers and input layers talk to the engine only through
//! `GameSession`. Reads go through `state()` or `snapshot()`; the only way a
//! card reaches a pile is `place_card` (or an intent that becomes one).
//!
//! AI turns are split in two so the deliberation delay can run without
//! holding the session: `schedule_ai_turn` captures a decision token and the
//! move count, and `resolve_ai_turn` refuses to act unless both still match.

pub mod intent;
pub mod snapshot;

use std::time::Duration;

pub use intent::{intent_to_move, parse_intent, DropTarget, IntentError, IntentSource, MoveIntent};
pub use snapshot::{PileSnapshot, SideSnapshot, StateSnapshot};

use crate::ai::generator::enumerate_candidates;
use crate::ai::scheduler::{AiTurnOutcome, PendingDecision};
use crate::ai::strategy::MoveStrategy;
use crate::core::{CardId, ConfigError, GameConfig, GameRng, GameState, PlaceCard, Side};
use crate::diagnostics::{run_invariants, InvariantReport};
use crate::rules::{CaravanRules, PlacementVerdict};

/// Notice shown when the AI has nothing it can play.
pub const AI_PASS_MESSAGE: &str = "The AI has no legal move and passes its turn.";

pub struct GameSession {
    rules: CaravanRules,
    state: GameState,
    rng: GameRng,
    ai_rng: GameRng,
    decision_token: u64,
}

impl GameSession {
    /// Validate the configuration and deal a first game.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        let ai_rng = rng.for_context("ai");
        let rules = CaravanRules::new(config);
        let state = rules.new_game(&mut rng);

        tracing::info!(seed = rng.seed(), "new game dealt");

        Ok(Self {
            rules,
            state,
            rng,
            ai_rng,
            decision_token: 0,
        })
    }

    /// Session around a prepared state, for replays and fixtures.
    pub fn from_state(config: GameConfig, state: GameState) -> Result<Self, ConfigError> {
        let mut session = Self::new(config)?;
        session.state = state;
        Ok(session)
    }

    #[must_use]
    pub fn rules(&self) -> &CaravanRules {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::of(&self.state)
    }

    #[must_use]
    pub fn decision_token(&self) -> u64 {
        self.decision_token
    }

    /// Play a card. Refusals leave a message on the state and change nothing else.
    pub fn place_card(
        &mut self,
        actor: Side,
        target: Side,
        card_id: CardId,
        pile_index: usize,
        target_index: Option<usize>,
    ) -> &GameState {
        let mut mv = PlaceCard::new(actor, target, card_id, pile_index);
        mv.target_index = target_index;
        self.apply_move(mv)
    }

    /// Commit an already-built move through the same path as `place_card`.
    pub fn apply_move(&mut self, mv: PlaceCard) -> &GameState {
        self.state = self.rules.place_card(&self.state, mv);
        &self.state
    }

    /// Could `card_id` be dropped onto the pile itself?
    #[must_use]
    pub fn can_drop_on_target_pile_container(
        &self,
        actor: Side,
        card_id: CardId,
        target: Side,
        pile_index: usize,
    ) -> PlacementVerdict {
        self.check_drop(PlaceCard::new(actor, target, card_id, pile_index))
    }

    /// Could `card_id` be dropped onto the card at `card_index` of the pile?
    #[must_use]
    pub fn can_drop_on_target_pile_card(
        &self,
        actor: Side,
        card_id: CardId,
        target: Side,
        pile_index: usize,
        card_index: usize,
    ) -> PlacementVerdict {
        self.check_drop(PlaceCard::new(actor, target, card_id, pile_index).targeting(card_index))
    }

    fn check_drop(&self, mv: PlaceCard) -> PlacementVerdict {
        let verdict = PlacementVerdict::from(self.rules.check_move(&self.state, mv));
        tracing::debug!(
            actor = %mv.actor,
            card = %mv.card_id,
            target = %mv.target,
            pile = mv.pile_index,
            ok = verdict.ok,
            "drop checked"
        );
        verdict
    }

    /// Apply a drag-and-drop intent. Malformed intents are ignored.
    pub fn apply_intent(
        &mut self,
        intent: &MoveIntent,
        drop: &DropTarget,
    ) -> Result<&GameState, IntentError> {
        match intent_to_move(intent, drop) {
            Ok(mv) => Ok(self.apply_move(mv)),
            Err(err) => {
                tracing::debug!(%err, "ignoring move intent");
                Err(err)
            }
        }
    }

    /// Same as `apply_intent`, starting from the raw JSON payload.
    pub fn apply_intent_json(
        &mut self,
        payload: &str,
        drop: &DropTarget,
    ) -> Result<&GameState, IntentError> {
        match parse_intent(payload) {
            Ok(intent) => self.apply_intent(&intent, drop),
            Err(err) => {
                tracing::debug!(%err, "ignoring move intent");
                Err(err)
            }
        }
    }

    /// Deal a fresh game. The AI toggle carries over and any pending AI
    /// decision becomes stale.
    pub fn reset_game(&mut self) -> &GameState {
        let ai_enabled = self.state.ai_enabled;
        self.decision_token += 1;
        self.state = self.rules.new_game(&mut self.rng);
        self.state.ai_enabled = ai_enabled;
        tracing::info!(token = self.decision_token, "game reset");
        &self.state
    }

    /// Toggle the AI. Any pending AI decision becomes stale.
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.decision_token += 1;
        self.state.ai_enabled = enabled;
        tracing::info!(enabled, token = self.decision_token, "AI toggled");
    }

    #[must_use]
    pub fn run_invariants(&self) -> InvariantReport {
        run_invariants(&self.state)
    }

    /// Start an AI deliberation if it is the AI's turn in a running game.
    ///
    /// Each call supersedes any earlier pending decision.
    pub fn schedule_ai_turn(&mut self) -> Option<PendingDecision> {
        if !self.state.ai_enabled || self.state.game_over || self.state.turn != Side::Ai {
            return None;
        }
        self.decision_token += 1;
        let config = self.rules.config();
        let millis = self
            .ai_rng
            .gen_range_inclusive(config.ai_delay_min_ms..=config.ai_delay_max_ms);
        let pending = PendingDecision {
            token: self.decision_token,
            move_count: self.state.move_count,
            delay: Duration::from_millis(millis),
        };
        tracing::debug!(token = pending.token, delay_ms = millis, "AI turn scheduled");
        Some(pending)
    }

    /// Whether `pending` may still act on the current state.
    #[must_use]
    pub fn is_current(&self, pending: &PendingDecision) -> bool {
        pending.token == self.decision_token
            && pending.move_count == self.state.move_count
            && self.state.ai_enabled
            && !self.state.game_over
            && self.state.turn == Side::Ai
    }

    /// Finish a scheduled AI turn: discard it if stale, pass if nothing is
    /// legal, otherwise commit the strategy's pick.
    pub fn resolve_ai_turn<S: MoveStrategy + ?Sized>(
        &mut self,
        pending: &PendingDecision,
        strategy: &S,
    ) -> AiTurnOutcome {
        if !self.is_current(pending) {
            tracing::warn!(
                token = pending.token,
                current = self.decision_token,
                scheduled_at = pending.move_count,
                moves = self.state.move_count,
                "discarding stale AI decision"
            );
            return AiTurnOutcome::Stale;
        }

        let candidates = enumerate_candidates(&self.state, Side::Ai);
        let choice = strategy
            .choose(&candidates, &self.state, &mut self.ai_rng)
            .filter(|mv| candidates.contains(mv));

        let Some(mv) = choice else {
            self.state = self.rules.skip_turn(&self.state, Side::Ai, AI_PASS_MESSAGE);
            return AiTurnOutcome::Skipped;
        };

        match self.rules.try_place_card(&self.state, mv) {
            Ok(next) => {
                self.state = next;
                AiTurnOutcome::Committed(mv)
            }
            Err(rejection) => {
                tracing::warn!(%rejection, "AI candidate refused at commit");
                self.state = self.rules.skip_turn(&self.state, Side::Ai, AI_PASS_MESSAGE);
                AiTurnOutcome::Skipped
            }
        }
    }
}
