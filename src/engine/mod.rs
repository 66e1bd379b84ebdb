//! The drink engine: the public surface a UI drives.
//!
//! `DrinkEngine` owns the game state, the injected RNG, the opponent
//! policy and the AI timer. Input comes in through `player_drink`,
//! `player_pass`, `restart`, `start_game` and the per-frame `tick`;
//! output goes out through observers and the query methods.

pub mod session;

pub use session::DrinkEngine;
