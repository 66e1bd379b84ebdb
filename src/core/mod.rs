//! Core game types: parties, configuration, choices, state, RNG.
//!
//! Everything here is plain data plus the batch draw. Turn rules live in
//! `rules`, the opponent's decision in `policy`.

pub mod party;
pub mod config;
pub mod rng;
pub mod action;
pub mod state;

pub use party::{Party, PartyMap};
pub use config::{ConfigError, GameConfig};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use action::Choice;
pub use state::{BatchState, DrawOutcome, GameState, HealthState, TurnState};
