//! Game configuration.
//!
//! A `GameConfig` fixes the starting hit points of both parties, the
//! shape of every batch, and how long the opponent waits before acting.
//! The engine refuses to start from a configuration that fails
//! [`GameConfig::validate`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a configuration cannot produce a playable game.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be at least 1 (got {value})")]
    NonPositiveHp { field: &'static str, value: i32 },
    #[error("a batch must hold at least one drink")]
    EmptyBatch,
    #[error("a batch must hold at least one poisoned drink")]
    NoPoison,
    #[error("{poisoned} poisoned drinks do not fit in a batch of {total}")]
    PoisonExceedsBatch { poisoned: u32, total: u32 },
    #[error("AI response delay must be a positive number of seconds a `Duration` can hold (got {0})")]
    InvalidDelay(f64),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player's starting hit points.
    pub player_hp: i32,

    /// Opponent's starting hit points.
    pub opponent_hp: i32,

    /// Drinks in a fresh batch.
    pub total_drinks: u32,

    /// Poisoned drinks in a fresh batch.
    pub poisoned_drinks: u32,

    /// Seconds the opponent waits before acting.
    pub ai_response_delay_secs: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_hp: 5,
            opponent_hp: 5,
            total_drinks: 6,
            poisoned_drinks: 2,
            ai_response_delay_secs: 1.0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default AI delay.
    pub fn new(player_hp: i32, opponent_hp: i32, total_drinks: u32, poisoned_drinks: u32) -> Self {
        Self {
            player_hp,
            opponent_hp,
            total_drinks,
            poisoned_drinks,
            ..Self::default()
        }
    }

    /// Set both starting hit points.
    #[must_use]
    pub fn with_hp(mut self, player_hp: i32, opponent_hp: i32) -> Self {
        self.player_hp = player_hp;
        self.opponent_hp = opponent_hp;
        self
    }

    /// Set the batch shape.
    #[must_use]
    pub fn with_batch(mut self, total_drinks: u32, poisoned_drinks: u32) -> Self {
        self.total_drinks = total_drinks;
        self.poisoned_drinks = poisoned_drinks;
        self
    }

    /// Set the AI response delay in seconds.
    #[must_use]
    pub fn with_ai_delay_secs(mut self, secs: f64) -> Self {
        self.ai_response_delay_secs = secs;
        self
    }

    /// AI response delay as a `Duration`.
    ///
    /// Fails for zero, negative, non-finite and unrepresentably large
    /// delays.
    pub fn ai_response_delay(&self) -> Result<Duration, ConfigError> {
        let secs = self.ai_response_delay_secs;
        if secs.is_nan() || secs <= 0.0 {
            return Err(ConfigError::InvalidDelay(secs));
        }
        match Duration::try_from_secs_f64(secs) {
            Ok(delay) if !delay.is_zero() => Ok(delay),
            _ => Err(ConfigError::InvalidDelay(secs)),
        }
    }

    /// Check every rule a playable configuration must satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_hp < 1 {
            return Err(ConfigError::NonPositiveHp {
                field: "player_hp",
                value: self.player_hp,
            });
        }
        if self.opponent_hp < 1 {
            return Err(ConfigError::NonPositiveHp {
                field: "opponent_hp",
                value: self.opponent_hp,
            });
        }
        if self.total_drinks == 0 {
            return Err(ConfigError::EmptyBatch);
        }
        if self.poisoned_drinks == 0 {
            return Err(ConfigError::NoPoison);
        }
        if self.poisoned_drinks > self.total_drinks {
            return Err(ConfigError::PoisonExceedsBatch {
                poisoned: self.poisoned_drinks,
                total: self.total_drinks,
            });
        }
        self.ai_response_delay()?;
        Ok(())
    }
}
