//! Game state: the batch being drawn from, both parties' hit points, and
//! whose turn it is.
//!
//! ## Batch invariant
//!
//! Between draws `0 <= poisoned_left <= drinks_left <= total_drinks`.
//! An empty batch is refilled to `(total_drinks, poisoned_drinks)` at the
//! start of the next draw, never before.

use log::trace;
use serde::{Deserialize, Serialize};

use super::config::{ConfigError, GameConfig};
use super::party::{Party, PartyMap};
use super::rng::RandomSource;

/// Result of drawing one drink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    /// True if the drawn drink was poisoned.
    pub poisoned: bool,
}

/// The current batch of drinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchState {
    total_drinks: u32,
    poisoned_drinks: u32,
    drinks_left: u32,
    poisoned_left: u32,
}

impl BatchState {
    /// A full batch of `total_drinks`, `poisoned_drinks` of them poisoned.
    ///
    /// Fails if the poison does not fit in the batch.
    pub fn new(total_drinks: u32, poisoned_drinks: u32) -> Result<Self, ConfigError> {
        if poisoned_drinks > total_drinks {
            return Err(ConfigError::PoisonExceedsBatch {
                poisoned: poisoned_drinks,
                total: total_drinks,
            });
        }
        Ok(Self::full(total_drinks, poisoned_drinks))
    }

    fn full(total_drinks: u32, poisoned_drinks: u32) -> Self {
        Self {
            total_drinks,
            poisoned_drinks,
            drinks_left: total_drinks,
            poisoned_left: poisoned_drinks,
        }
    }

    /// A full batch shaped by an already validated configuration.
    pub(crate) fn from_config(config: &GameConfig) -> Self {
        Self::full(config.total_drinks, config.poisoned_drinks)
    }

    /// Drinks in a fresh batch.
    #[must_use]
    pub fn total_drinks(&self) -> u32 {
        self.total_drinks
    }

    /// Poisoned drinks in a fresh batch.
    #[must_use]
    pub fn poisoned_drinks(&self) -> u32 {
        self.poisoned_drinks
    }

    /// Drinks still in the batch.
    #[must_use]
    pub fn drinks_left(&self) -> u32 {
        self.drinks_left
    }

    /// Poisoned drinks still in the batch.
    #[must_use]
    pub fn poisoned_left(&self) -> u32 {
        self.poisoned_left
    }

    /// True when the next draw will refill the batch first.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.drinks_left == 0
    }

    /// Chance that the next drawn drink is poisoned.
    #[must_use]
    pub fn poison_chance(&self) -> f64 {
        let (drinks, poisoned) = if self.is_exhausted() {
            (self.total_drinks, self.poisoned_drinks)
        } else {
            (self.drinks_left, self.poisoned_left)
        };
        if poisoned == 0 || drinks == 0 {
            return 0.0;
        }
        (f64::from(poisoned) / f64::from(drinks)).min(1.0)
    }

    /// Refill to the configured shape.
    pub fn replenish(&mut self) {
        self.drinks_left = self.total_drinks;
        self.poisoned_left = self.poisoned_drinks;
    }

    /// Remove one drink from the batch and decide whether it was poisoned.
    ///
    /// An exhausted batch is refilled first. The drink is taken before
    /// the roll, so the odds divide by the count left *after* removal
    /// plus one.
    pub fn draw(&mut self, rng: &mut dyn RandomSource) -> DrawOutcome {
        if self.is_exhausted() {
            self.replenish();
            trace!("batch replenished to {}/{}", self.drinks_left, self.poisoned_left);
        }

        self.drinks_left = self.drinks_left.saturating_sub(1);

        let mut poisoned = false;
        if self.poisoned_left > 0 {
            let chance = (f64::from(self.poisoned_left) / f64::from(self.drinks_left + 1)).min(1.0);
            if rng.next_unit() < chance {
                poisoned = true;
                self.poisoned_left -= 1;
            }
        }

        DrawOutcome { poisoned }
    }
}

/// Hit points of both parties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthState {
    hp: PartyMap<i32>,
}

impl HealthState {
    /// Hit points for the player and the opponent.
    #[must_use]
    pub fn new(player_hp: i32, opponent_hp: i32) -> Self {
        Self {
            hp: PartyMap::new(player_hp, opponent_hp),
        }
    }

    pub(crate) fn from_config(config: &GameConfig) -> Self {
        Self::new(config.player_hp, config.opponent_hp)
    }

    /// Hit points of `party`.
    #[must_use]
    pub fn hp(&self, party: Party) -> i32 {
        self.hp[party]
    }

    /// Player's hit points.
    #[must_use]
    pub fn player_hp(&self) -> i32 {
        self.hp[Party::Player]
    }

    /// Opponent's hit points.
    #[must_use]
    pub fn opponent_hp(&self) -> i32 {
        self.hp[Party::Opponent]
    }

    /// Take one hit point from `party`.
    pub fn damage(&mut self, party: Party) {
        self.hp[party] -= 1;
    }

    /// True once `party` has no hit points left.
    #[must_use]
    pub fn is_out(&self, party: Party) -> bool {
        self.hp[party] <= 0
    }
}

/// Whose turn it is, or who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    PlayerTurn,
    OpponentTurn,
    GameOver { winner: Party },
}

impl TurnState {
    /// The turn state in which `party` acts.
    #[must_use]
    pub const fn turn_of(party: Party) -> Self {
        match party {
            Party::Player => TurnState::PlayerTurn,
            Party::Opponent => TurnState::OpponentTurn,
        }
    }

    /// The party allowed to act, if the game is still running.
    #[must_use]
    pub const fn actor(self) -> Option<Party> {
        match self {
            TurnState::PlayerTurn => Some(Party::Player),
            TurnState::OpponentTurn => Some(Party::Opponent),
            TurnState::GameOver { .. } => None,
        }
    }

    /// True once a winner is decided.
    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, TurnState::GameOver { .. })
    }

    /// The winner, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Party> {
        match self {
            TurnState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Complete game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub batch: BatchState,
    pub health: HealthState,
    pub turn: TurnState,
}

impl GameState {
    /// Fresh state for a new game: full batch, full health, player first.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    pub(crate) fn fresh(config: &GameConfig) -> Self {
        Self {
            batch: BatchState::from_config(config),
            health: HealthState::from_config(config),
            turn: TurnState::PlayerTurn,
        }
    }
}
