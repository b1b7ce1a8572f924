//! Game configuration.
//!
//! Defaults follow the standard table rules: five-card opening hands,
//! piles qualify between 21 and 26, and the AI deliberates for 600-1200 ms.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Cards dealt to each side at the start of a game.
pub const DEFAULT_HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand size must be at least 1")]
    EmptyHand,

    #[error("hand size {0} leaves no deck to draw from")]
    HandTooLarge(usize),

    #[error("win range {min}..={max} is empty")]
    EmptyWinRange { min: u32, max: u32 },

    #[error("AI delay range {min}..={max} ms is empty")]
    EmptyDelayRange { min: u64, max: u64 },
}

/// Table rules and pacing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opening hand size per side.
    pub hand_size: usize,

    /// Lowest pile total that qualifies for victory.
    pub win_min: u32,

    /// Highest pile total that qualifies for victory.
    pub win_max: u32,

    /// Shortest AI deliberation delay in milliseconds.
    pub ai_delay_min_ms: u64,

    /// Longest AI deliberation delay in milliseconds.
    pub ai_delay_max_ms: u64,

    /// Whether the automated side takes its turns.
    pub ai_enabled: bool,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            win_min: 21,
            win_max: 26,
            ai_delay_min_ms: 600,
            ai_delay_max_ms: 1200,
            ai_enabled: true,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn with_win_range(mut self, min: u32, max: u32) -> Self {
        self.win_min = min;
        self.win_max = max;
        self
    }

    pub fn with_ai_delay_ms(mut self, min: u64, max: u64) -> Self {
        self.ai_delay_min_ms = min;
        self.ai_delay_max_ms = max;
        self
    }

    pub fn with_ai_enabled(mut self, enabled: bool) -> Self {
        self.ai_enabled = enabled;
        self
    }

    /// Whether a pile total lies in the winning band.
    #[must_use]
    pub fn qualifies(&self, total: u32) -> bool {
        (self.win_min..=self.win_max).contains(&total)
    }

    /// Delay bounds as durations.
    #[must_use]
    pub fn ai_delay_bounds(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.ai_delay_min_ms),
            Duration::from_millis(self.ai_delay_max_ms),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        // Both hands come out of one 52-card deck.
        if self.hand_size.saturating_mul(2) >= super::card::DECK_SIZE {
            return Err(ConfigError::HandTooLarge(self.hand_size));
        }
        if self.win_min > self.win_max {
            return Err(ConfigError::EmptyWinRange {
                min: self.win_min,
                max: self.win_max,
            });
        }
        if self.ai_delay_min_ms > self.ai_delay_max_ms {
            return Err(ConfigError::EmptyDelayRange {
                min: self.ai_delay_min_ms,
                max: self.ai_delay_max_ms,
            });
        }
        Ok(())
    }
}
