//! Event and message types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{BatchState, Choice, DrawOutcome, GameConfig, HealthState, Party, TurnState};

/// Message class describing the latest thing that happened.
///
/// `Display` gives a ready-made English line for simple text UIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultMessage {
    AwaitingPlayerChoice,
    PlayerDrankSafe,
    PlayerDrankPoison,
    PlayerPassedSafe,
    PlayerPassedPoison,
    OpponentDrankSafe,
    OpponentDrankPoison,
    OpponentPassedSafe,
    OpponentPassedPoison,
    PlayerWon,
    PlayerLost,
}

impl ResultMessage {
    /// Message for a resolved choice.
    #[must_use]
    pub fn for_choice(actor: Party, choice: Choice, outcome: DrawOutcome) -> Self {
        use ResultMessage::*;
        match (actor, choice, outcome.poisoned) {
            (Party::Player, Choice::Drink, false) => PlayerDrankSafe,
            (Party::Player, Choice::Drink, true) => PlayerDrankPoison,
            (Party::Player, Choice::Pass, false) => PlayerPassedSafe,
            (Party::Player, Choice::Pass, true) => PlayerPassedPoison,
            (Party::Opponent, Choice::Drink, false) => OpponentDrankSafe,
            (Party::Opponent, Choice::Drink, true) => OpponentDrankPoison,
            (Party::Opponent, Choice::Pass, false) => OpponentPassedSafe,
            (Party::Opponent, Choice::Pass, true) => OpponentPassedPoison,
        }
    }

    /// Message announcing the end of the game.
    #[must_use]
    pub fn for_winner(winner: Party) -> Self {
        match winner {
            Party::Player => ResultMessage::PlayerWon,
            Party::Opponent => ResultMessage::PlayerLost,
        }
    }

    /// True for the two end-of-game messages.
    #[must_use]
    pub fn is_final(self) -> bool {
        matches!(self, ResultMessage::PlayerWon | ResultMessage::PlayerLost)
    }
}

impl std::fmt::Display for ResultMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ResultMessage::AwaitingPlayerChoice => "Your turn! Choose Drink or Pass.",
            ResultMessage::PlayerDrankSafe => "You drank safely! You get to choose again.",
            ResultMessage::PlayerDrankPoison => "You drank poison! -1 HP",
            ResultMessage::PlayerPassedSafe => "You passed a safe drink.",
            ResultMessage::PlayerPassedPoison => "You passed poison! Opponent -1 HP",
            ResultMessage::OpponentDrankSafe => "Opponent chose DRINK and was safe.",
            ResultMessage::OpponentDrankPoison => "Opponent chose DRINK and got poison! -1 HP",
            ResultMessage::OpponentPassedSafe => "Opponent chose PASS but it was safe.",
            ResultMessage::OpponentPassedPoison => "Opponent chose PASS and gave you poison! -1 HP",
            ResultMessage::PlayerWon => "You win! Opponent is out.",
            ResultMessage::PlayerLost => "You lost! Opponent wins.",
        };
        f.write_str(text)
    }
}

/// Something the engine did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A new game began (fresh start or restart).
    GameStarted { config: GameConfig },
    /// The batch ran dry and was refilled before a draw.
    BatchReplenished { total_drinks: u32, poisoned_drinks: u32 },
    /// A choice was played out.
    DrinkResolved {
        actor: Party,
        choice: Choice,
        outcome: DrawOutcome,
    },
    HealthChanged { health: HealthState },
    BatchChanged { batch: BatchState },
    Message { message: ResultMessage },
    /// Turn moved (or stayed) after a choice; `accepting_input` says
    /// whether the player's controls should be live.
    TurnChanged { turn: TurnState, accepting_input: bool },
    /// The opponent will act after `delay`.
    OpponentScheduled { delay: Duration },
    GameOver { winner: Party },
}
