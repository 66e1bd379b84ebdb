//! Choice resolution and the turn / game-over state machine.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Choice, DrawOutcome, GameState, HealthState, Party, RandomSource, TurnState};

/// What a single choice did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub actor: Party,
    pub choice: Choice,
    pub outcome: DrawOutcome,
    /// Party that lost a hit point, if any.
    pub damaged: Option<Party>,
    /// False only for a safe drink: the actor chooses again.
    pub turn_advances: bool,
}

/// Resolve a choice against a draw outcome.
///
/// | choice | poisoned | damaged     | turn advances |
/// |--------|----------|-------------|---------------|
/// | Drink  | yes      | actor       | yes           |
/// | Drink  | no       | nobody      | no            |
/// | Pass   | yes      | other party | yes           |
/// | Pass   | no       | nobody      | yes           |
#[must_use]
pub fn resolve(actor: Party, choice: Choice, outcome: DrawOutcome) -> Resolution {
    let (damaged, turn_advances) = match (choice, outcome.poisoned) {
        (Choice::Drink, true) => (Some(actor), true),
        (Choice::Drink, false) => (None, false),
        (Choice::Pass, true) => (Some(actor.other()), true),
        (Choice::Pass, false) => (None, true),
    };
    Resolution {
        actor,
        choice,
        outcome,
        damaged,
        turn_advances,
    }
}

/// The winner, if either party is out.
///
/// The player is checked first; a single draw never damages both.
#[must_use]
pub fn check_winner(health: &HealthState) -> Option<Party> {
    if health.is_out(Party::Player) {
        Some(Party::Opponent)
    } else if health.is_out(Party::Opponent) {
        Some(Party::Player)
    } else {
        None
    }
}

/// Play one choice for `actor`.
///
/// Returns `None` without touching the state (and without reading the
/// RNG) when it is not `actor`'s turn, which includes every call after
/// the game is over.
pub fn apply_choice(
    state: &mut GameState,
    actor: Party,
    choice: Choice,
    rng: &mut dyn RandomSource,
) -> Option<Resolution> {
    if state.turn.actor() != Some(actor) {
        debug!("{actor} tried to {choice} out of turn ({:?})", state.turn);
        return None;
    }

    let outcome = state.batch.draw(rng);
    let resolution = resolve(actor, choice, outcome);

    if let Some(party) = resolution.damaged {
        state.health.damage(party);
    }

    state.turn = match check_winner(&state.health) {
        Some(winner) => TurnState::GameOver { winner },
        None if resolution.turn_advances => TurnState::turn_of(actor.other()),
        None => TurnState::turn_of(actor),
    };

    debug!(
        "{actor} chose {choice}: poisoned={} damaged={:?} -> {:?} (hp {}/{}, batch {}/{})",
        outcome.poisoned,
        resolution.damaged,
        state.turn,
        state.health.player_hp(),
        state.health.opponent_hp(),
        state.batch.drinks_left(),
        state.batch.poisoned_left(),
    );

    Some(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, ScriptedRng};

    const POISON: f64 = 0.0;
    const SAFE: f64 = ScriptedRng::ALWAYS_HIGH;

    fn state(player_hp: i32, opponent_hp: i32) -> GameState {
        GameState::new(&GameConfig::new(player_hp, opponent_hp, 6, 2)).unwrap()
    }

    #[test]
    fn test_resolve_table() {
        let poisoned = DrawOutcome { poisoned: true };
        let safe = DrawOutcome { poisoned: false };

        let r = resolve(Party::Player, Choice::Drink, poisoned);
        assert_eq!((r.damaged, r.turn_advances), (Some(Party::Player), true));

        let r = resolve(Party::Player, Choice::Drink, safe);
        assert_eq!((r.damaged, r.turn_advances), (None, false));

        let r = resolve(Party::Opponent, Choice::Pass, poisoned);
        assert_eq!((r.damaged, r.turn_advances), (Some(Party::Player), true));

        let r = resolve(Party::Opponent, Choice::Pass, safe);
        assert_eq!((r.damaged, r.turn_advances), (None, true));
    }

    #[test]
    fn test_check_winner() {
        assert_eq!(check_winner(&HealthState::new(1, 1)), None);
        assert_eq!(check_winner(&HealthState::new(0, 3)), Some(Party::Opponent));
        assert_eq!(check_winner(&HealthState::new(3, -1)), Some(Party::Player));
    }

    #[test]
    fn test_safe_drink_keeps_turn() {
        let mut state = state(5, 5);
        let mut rng = ScriptedRng::new([SAFE]);

        let r = apply_choice(&mut state, Party::Player, Choice::Drink, &mut rng).unwrap();

        assert!(!r.outcome.poisoned);
        assert_eq!(state.turn, TurnState::PlayerTurn);
        assert_eq!(state.health, HealthState::new(5, 5));
    }

    #[test]
    fn test_poisoned_drink_ends_turn() {
        let mut state = state(5, 5);
        let mut rng = ScriptedRng::new([POISON]);

        apply_choice(&mut state, Party::Player, Choice::Drink, &mut rng).unwrap();

        assert_eq!(state.health.player_hp(), 4);
        assert_eq!(state.turn, TurnState::OpponentTurn);
    }

    #[test]
    fn test_pass_always_ends_turn() {
        let mut state = state(5, 5);
        let mut rng = ScriptedRng::new([SAFE, POISON]);

        apply_choice(&mut state, Party::Player, Choice::Pass, &mut rng).unwrap();
        assert_eq!(state.turn, TurnState::OpponentTurn);
        assert_eq!(state.health, HealthState::new(5, 5));

        apply_choice(&mut state, Party::Opponent, Choice::Pass, &mut rng).unwrap();
        assert_eq!(state.turn, TurnState::PlayerTurn);
        assert_eq!(state.health, HealthState::new(4, 5));
    }

    #[test]
    fn test_out_of_turn_is_ignored() {
        let mut state = state(5, 5);
        let before = state;
        let mut rng = ScriptedRng::new([POISON]);

        assert!(apply_choice(&mut state, Party::Opponent, Choice::Drink, &mut rng).is_none());
        assert_eq!(state, before);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_lethal_pass_ends_game() {
        let mut state = state(5, 1);
        let mut rng = ScriptedRng::new([POISON, POISON]);

        apply_choice(&mut state, Party::Player, Choice::Pass, &mut rng).unwrap();
        assert_eq!(state.turn, TurnState::GameOver { winner: Party::Player });

        let before = state;
        assert!(apply_choice(&mut state, Party::Player, Choice::Drink, &mut rng).is_none());
        assert!(apply_choice(&mut state, Party::Opponent, Choice::Drink, &mut rng).is_none());
        assert_eq!(state, before);
    }
}
