//! Opponent policies.

use crate::core::{Choice, GameState, RandomSource};

/// Policy for choosing the opponent's move.
pub trait OpponentPolicy {
    /// Pick `Drink` or `Pass` for the opponent in `state`.
    fn choose(&self, state: &GameState, rng: &mut dyn RandomSource) -> Choice;
}

/// Coin-flip opponent.
///
/// Ignores hit points and batch contents: drinks when the uniform value
/// is at least 0.5, passes otherwise.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose(&self, _state: &GameState, rng: &mut dyn RandomSource) -> Choice {
        if rng.next_unit() >= 0.5 {
            Choice::Drink
        } else {
            Choice::Pass
        }
    }
}

/// Always makes the same choice. Does not consume randomness.
#[derive(Clone, Copy, Debug)]
pub struct FixedOpponent(pub Choice);

impl OpponentPolicy for FixedOpponent {
    fn choose(&self, _state: &GameState, _rng: &mut dyn RandomSource) -> Choice {
        self.0
    }
}

impl<P: OpponentPolicy + ?Sized> OpponentPolicy for Box<P> {
    fn choose(&self, state: &GameState, rng: &mut dyn RandomSource) -> Choice {
        (**self).choose(state, rng)
    }
}
