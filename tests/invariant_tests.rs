//! Property tests for the batch, health and turn invariants.
//!
//! Random configurations, seeds and player choice sequences are played
//! through the engine; every intermediate state is checked.

use std::time::Duration;

use proptest::prelude::*;

use drink_roulette::rules::apply_choice;
use drink_roulette::{
    BatchState, Choice, DrinkEngine, GameConfig, GameRng, GameState, Party, RandomSource,
    ScriptedRng, TurnState,
};

fn config_strategy() -> impl Strategy<Value = GameConfig> {
    (1..8i32, 1..8i32, 1..10u32)
        .prop_flat_map(|(player_hp, opponent_hp, total)| {
            (Just(player_hp), Just(opponent_hp), Just(total), 1..=total)
        })
        .prop_map(|(player_hp, opponent_hp, total, poisoned)| {
            GameConfig::new(player_hp, opponent_hp, total, poisoned).with_ai_delay_secs(0.5)
        })
}

fn check_batch(batch: &BatchState) -> Result<(), TestCaseError> {
    prop_assert!(batch.poisoned_left() <= batch.drinks_left());
    prop_assert!(batch.drinks_left() <= batch.total_drinks());
    Ok(())
}

fn check_health(engine_state: &GameState) -> Result<(), TestCaseError> {
    let health = &engine_state.health;
    prop_assert!(!(health.is_out(Party::Player) && health.is_out(Party::Opponent)));
    match engine_state.turn {
        TurnState::GameOver { winner } => {
            prop_assert!(health.is_out(winner.other()));
        }
        _ => {
            prop_assert!(!health.is_out(Party::Player));
            prop_assert!(!health.is_out(Party::Opponent));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_engine_invariants_hold(
        config in config_strategy(),
        seed in any::<u64>(),
        drinks in prop::collection::vec(any::<bool>(), 1..200),
    ) {
        let mut engine = DrinkEngine::new(config, GameRng::new(seed)).unwrap();

        for drink in drinks {
            while engine.ai_pending() {
                engine.tick(Duration::from_millis(500));
                check_batch(&engine.batch())?;
                check_health(engine.state())?;
            }
            if engine.is_game_over() {
                let before = *engine.state();
                prop_assert!(!engine.player_drink());
                prop_assert!(!engine.player_pass());
                prop_assert_eq!(*engine.state(), before);
                break;
            }

            let accepted = if drink { engine.player_drink() } else { engine.player_pass() };
            prop_assert!(accepted);
            check_batch(&engine.batch())?;
            check_health(engine.state())?;
        }
    }

    #[test]
    fn prop_turn_advance_rules(
        config in config_strategy(),
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<bool>(), 1..100),
    ) {
        let mut state = GameState::new(&config).unwrap();
        let mut rng = GameRng::new(seed);

        for drink in choices {
            let Some(actor) = state.turn.actor() else { break };
            let choice = if drink { Choice::Drink } else { Choice::Pass };
            let hp_before = state.health;

            let r = apply_choice(&mut state, actor, choice, &mut rng).unwrap();

            match (choice, r.outcome.poisoned) {
                (Choice::Drink, false) => {
                    prop_assert_eq!(state.turn, TurnState::turn_of(actor));
                    prop_assert_eq!(state.health, hp_before);
                }
                (Choice::Drink, true) => {
                    prop_assert_ne!(state.turn, TurnState::turn_of(actor));
                    prop_assert_eq!(state.health.hp(actor), hp_before.hp(actor) - 1);
                }
                (Choice::Pass, poisoned) => {
                    prop_assert_ne!(state.turn, TurnState::turn_of(actor));
                    let other = actor.other();
                    let expected = hp_before.hp(other) - i32::from(poisoned);
                    prop_assert_eq!(state.health.hp(other), expected);
                }
            }
        }
    }

    #[test]
    fn prop_batch_replenishes_to_configured_shape(
        total in 1..12u32,
        poison_ratio in 0.0..=1.0f64,
        seed in any::<u64>(),
    ) {
        let poisoned = ((f64::from(total) * poison_ratio).round() as u32).clamp(1, total);
        let mut batch = BatchState::new(total, poisoned).unwrap();
        let mut rng = GameRng::new(seed);

        for _ in 0..3 {
            let mut poison_seen = 0;
            for _ in 0..total {
                if batch.draw(&mut rng).poisoned {
                    poison_seen += 1;
                }
                check_batch(&batch)?;
            }
            // Drawing without replacement: every poisoned drink comes out.
            prop_assert!(batch.is_exhausted());
            prop_assert_eq!(batch.poisoned_left(), 0);
            prop_assert_eq!(poison_seen, poisoned);
        }
    }

    #[test]
    fn prop_seeded_draws_are_reproducible(seed in any::<u64>(), total in 1..10u32) {
        let mut a = BatchState::new(total, 1).unwrap();
        let mut b = BatchState::new(total, 1).unwrap();
        let mut rng_a = GameRng::new(seed);
        let mut rng_b = GameRng::new(seed);

        for _ in 0..(total * 3) {
            prop_assert_eq!(a.draw(&mut rng_a), b.draw(&mut rng_b));
        }
        prop_assert_eq!(rng_a.next_unit(), rng_b.next_unit());
    }
}

#[test]
fn test_scripted_replay_matches_engine() {
    let script = [0.9, 0.1, 0.9, 0.9, 0.2];
    let config = GameConfig::default();

    let mut engine = DrinkEngine::new(config.clone(), ScriptedRng::new(script)).unwrap();
    let mut state = GameState::new(&config).unwrap();
    let mut rng = ScriptedRng::new(script);

    // Safe (0.9 vs 2/6), then poisoned (0.1 vs 2/5): the turn ends.
    while engine.player_drink() {
        apply_choice(&mut state, Party::Player, Choice::Drink, &mut rng).unwrap();
    }

    assert_eq!(*engine.state(), state);
    assert_eq!(state.turn, TurnState::OpponentTurn);
    assert_eq!(state.health.player_hp(), 4);
}
