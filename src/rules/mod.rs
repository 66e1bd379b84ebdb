//! Turn rules.
//!
//! Given who acted, what they chose and what the drawn drink turned out
//! to be, the rules decide who loses a hit point, whether the turn ends,
//! and whether the game is over. Nothing here touches timers or
//! observers; the engine layers those on top.

pub mod turn;

pub use turn::{apply_choice, check_winner, resolve, Resolution};
