//! Opponent decision making.
//!
//! The opponent acts through the same rules as the player; a policy only
//! picks the `Choice`. Policies are trait-based so hosts can swap in a
//! smarter opponent without touching the engine.

pub mod opponent;

pub use opponent::{FixedOpponent, OpponentPolicy, UniformOpponent};
