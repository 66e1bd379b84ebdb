//! What a party can do on its turn.

use serde::{Deserialize, Serialize};

/// A party's choice for the next drink in the batch.
///
/// - `Drink`: the chooser risks the poison; a safe drink keeps the turn.
/// - `Pass`: the other party risks the poison; the turn always ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    Drink,
    Pass,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::Drink => write!(f, "DRINK"),
            Choice::Pass => write!(f, "PASS"),
        }
    }
}
