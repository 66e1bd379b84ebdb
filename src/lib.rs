//! # drink-roulette
//!
//! Turn engine for a two-party "poisoned drink" party game.
//!
//! A shared batch of drinks hides a known number of poisoned ones. On
//! their turn a party either drinks (a poisoned drink costs them a hit
//! point and ends the turn, a safe one lets them choose again) or passes
//! (a poisoned drink costs the other party a hit point; the turn ends
//! either way). The first party to run out of hit points loses.
//!
//! ## Architecture
//!
//! - **Injected randomness**: every roll reads a [`RandomSource`], so a
//!   seeded [`GameRng`] replays a game exactly and a [`ScriptedRng`]
//!   forces outcomes in tests.
//! - **Logical clock**: the opponent's thinking delay is a cancellable
//!   timer driven by the host's frame loop through
//!   [`DrinkEngine::tick`]. Restarting invalidates any pending timer.
//! - **Observers, not widgets**: the engine emits [`EngineEvent`]s and
//!   exposes queries; rendering belongs to the host.
//!
//! ## Modules
//!
//! - `core`: parties, configuration, choices, state, RNG
//! - `rules`: choice resolution and the turn / game-over state machine
//! - `policy`: opponent decision making
//! - `schedule`: logical clock and cancellable timer
//! - `events`: engine events, result messages, observers
//! - `engine`: the public `DrinkEngine`

pub mod core;
pub mod rules;
pub mod policy;
pub mod schedule;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Party, PartyMap,
    GameConfig, ConfigError,
    GameRng, RandomSource, ScriptedRng,
    Choice,
    BatchState, DrawOutcome, GameState, HealthState, TurnState,
};

pub use crate::rules::Resolution;

pub use crate::policy::{FixedOpponent, OpponentPolicy, UniformOpponent};

pub use crate::schedule::{Scheduler, TimerHandle};

pub use crate::events::{EngineEvent, EngineObserver, EventLog, ResultMessage};

pub use crate::engine::DrinkEngine;
