//! Party identification and per-party data storage.
//!
//! ## Party
//!
//! The game always has exactly two sides: the human `Player` and the
//! AI-driven `Opponent`.
//!
//! ## PartyMap
//!
//! Two-slot storage indexed by `Party` with O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    /// The human at the controls.
    Player,
    /// The AI-driven side.
    Opponent,
}

impl Party {
    /// Both parties, player first.
    pub const ALL: [Party; 2] = [Party::Player, Party::Opponent];

    /// The other side of the table.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Party::Player => Party::Opponent,
            Party::Opponent => Party::Player,
        }
    }

    /// Slot index (player = 0, opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Party::Player => 0,
            Party::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::Player => write!(f, "Player"),
            Party::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Per-party data storage.
///
/// ```
/// use drink_roulette::core::{Party, PartyMap};
///
/// let mut hp = PartyMap::new(5, 3);
/// assert_eq!(hp[Party::Player], 5);
///
/// hp[Party::Opponent] -= 1;
/// assert_eq!(hp[Party::Opponent], 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyMap<T> {
    data: [T; 2],
}

impl<T> PartyMap<T> {
    /// Create a map from the player's and the opponent's values.
    pub fn new(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Get a reference to a party's data.
    #[must_use]
    pub fn get(&self, party: Party) -> &T {
        &self.data[party.index()]
    }

    /// Get a mutable reference to a party's data.
    pub fn get_mut(&mut self, party: Party) -> &mut T {
        &mut self.data[party.index()]
    }

    /// Iterate over (Party, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Party, &T)> {
        Party::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Party> for PartyMap<T> {
    type Output = T;

    fn index(&self, party: Party) -> &Self::Output {
        self.get(party)
    }
}

impl<T> IndexMut<Party> for PartyMap<T> {
    fn index_mut(&mut self, party: Party) -> &mut Self::Output {
        self.get_mut(party)
    }
}
