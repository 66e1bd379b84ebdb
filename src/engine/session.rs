//! Game session: state machine, AI timer and event emission.

use std::time::Duration;

use log::{debug, info, warn};

use crate::core::{
    BatchState, Choice, ConfigError, GameConfig, GameRng, GameState, HealthState, Party, RandomSource,
    TurnState,
};
use crate::events::{EngineEvent, EngineObserver, ResultMessage};
use crate::policy::{OpponentPolicy, UniformOpponent};
use crate::rules::{apply_choice, Resolution};
use crate::schedule::{Scheduler, TimerHandle};

/// A running game of drink roulette.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use drink_roulette::{DrinkEngine, GameConfig, GameRng, TurnState};
///
/// let mut engine = DrinkEngine::new(GameConfig::default(), GameRng::new(7)).unwrap();
/// assert!(engine.accepting_player_input());
///
/// // Pass until the turn reaches the opponent, then let its timer run out.
/// assert!(engine.player_pass());
/// assert_eq!(engine.turn(), TurnState::OpponentTurn);
/// assert!(engine.tick(Duration::from_secs(1)));
/// ```
pub struct DrinkEngine<R = GameRng, P = UniformOpponent> {
    config: GameConfig,
    ai_delay: Duration,
    state: GameState,
    message: ResultMessage,
    rng: R,
    policy: P,
    scheduler: Scheduler,
    ai_timer: Option<TimerHandle>,
    observers: Vec<Box<dyn EngineObserver>>,
}

impl<R: RandomSource> DrinkEngine<R, UniformOpponent> {
    /// Start a game against the coin-flip opponent.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        Self::with_policy(config, rng, UniformOpponent)
    }
}

impl<R: RandomSource, P: OpponentPolicy> DrinkEngine<R, P> {
    /// Start a game against a custom opponent policy.
    pub fn with_policy(config: GameConfig, rng: R, policy: P) -> Result<Self, ConfigError> {
        let ai_delay = checked_delay(&config)?;
        info!("new game: {config:?}");
        Ok(Self {
            state: GameState::fresh(&config),
            config,
            ai_delay,
            message: ResultMessage::AwaitingPlayerChoice,
            rng,
            policy,
            scheduler: Scheduler::new(),
            ai_timer: None,
            observers: Vec::new(),
        })
    }

    /// Register an observer. It hears every event from now on.
    pub fn subscribe(&mut self, observer: Box<dyn EngineObserver>) {
        self.observers.push(observer);
    }

    // === Input ===

    /// Start a fresh game with a new configuration.
    ///
    /// An invalid configuration is rejected and the current game, pending
    /// opponent action included, carries on untouched.
    pub fn start_game(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        self.ai_delay = checked_delay(&config)?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Start over with the current configuration.
    pub fn restart(&mut self) {
        self.reset();
    }

    /// The player drinks. Returns false if the player may not act now.
    pub fn player_drink(&mut self) -> bool {
        self.play(Party::Player, Choice::Drink).is_some()
    }

    /// The player passes. Returns false if the player may not act now.
    pub fn player_pass(&mut self) -> bool {
        self.play(Party::Player, Choice::Pass).is_some()
    }

    /// Advance the clock by `dt`. Returns true if the opponent acted.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(fired) = self.scheduler.advance(dt) else {
            return false;
        };
        if self.ai_timer != Some(fired) {
            debug!("ignoring stale timer (gen {})", fired.generation());
            return false;
        }
        self.ai_timer = None;
        if self.state.turn != TurnState::OpponentTurn {
            return false;
        }

        let choice = self.policy.choose(&self.state, &mut self.rng);
        self.play(Party::Opponent, choice).is_some()
    }

    // === Queries ===

    /// Configuration of the current game.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Full game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Both parties' hit points.
    #[must_use]
    pub fn health(&self) -> HealthState {
        self.state.health
    }

    /// Current batch counts.
    #[must_use]
    pub fn batch(&self) -> BatchState {
        self.state.batch
    }

    /// Whose turn it is, or who won.
    #[must_use]
    pub fn turn(&self) -> TurnState {
        self.state.turn
    }

    /// Latest message for the UI.
    #[must_use]
    pub fn message(&self) -> ResultMessage {
        self.message
    }

    /// True once either party is out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.turn.is_game_over()
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Party> {
        self.state.turn.winner()
    }

    /// True while the drink/pass controls should be shown.
    #[must_use]
    pub fn accepting_player_input(&self) -> bool {
        self.state.turn == TurnState::PlayerTurn
    }

    /// True while the opponent's action is waiting on its timer.
    #[must_use]
    pub fn ai_pending(&self) -> bool {
        self.ai_timer.is_some()
    }

    /// Time until the opponent acts, if it is waiting.
    #[must_use]
    pub fn ai_remaining(&self) -> Option<Duration> {
        self.ai_timer.and(self.scheduler.remaining())
    }

    // === Internals ===

    fn reset(&mut self) {
        self.scheduler.cancel();
        self.ai_timer = None;
        self.state = GameState::fresh(&self.config);
        self.message = ResultMessage::AwaitingPlayerChoice;
        info!("game started: {:?}", self.config);

        self.emit(EngineEvent::GameStarted {
            config: self.config.clone(),
        });
        self.emit(EngineEvent::HealthChanged {
            health: self.state.health,
        });
        self.emit(EngineEvent::BatchChanged {
            batch: self.state.batch,
        });
        self.emit(EngineEvent::Message {
            message: self.message,
        });
        self.emit_turn();
    }

    fn play(&mut self, actor: Party, choice: Choice) -> Option<Resolution> {
        let replenishing = self.state.batch.is_exhausted();
        let resolution = apply_choice(&mut self.state, actor, choice, &mut self.rng)?;

        if replenishing {
            self.emit(EngineEvent::BatchReplenished {
                total_drinks: self.config.total_drinks,
                poisoned_drinks: self.config.poisoned_drinks,
            });
        }
        self.emit(EngineEvent::DrinkResolved {
            actor,
            choice,
            outcome: resolution.outcome,
        });
        if resolution.damaged.is_some() {
            self.emit(EngineEvent::HealthChanged {
                health: self.state.health,
            });
        }
        self.emit(EngineEvent::BatchChanged {
            batch: self.state.batch,
        });

        self.message = ResultMessage::for_choice(actor, choice, resolution.outcome);
        self.emit(EngineEvent::Message {
            message: self.message,
        });

        if let Some(winner) = self.state.turn.winner() {
            info!("game over: {winner} wins");
            self.message = ResultMessage::for_winner(winner);
            self.emit(EngineEvent::GameOver { winner });
            self.emit(EngineEvent::Message {
                message: self.message,
            });
        }

        self.emit_turn();

        if self.state.turn == TurnState::OpponentTurn {
            self.schedule_opponent();
        }

        Some(resolution)
    }

    fn schedule_opponent(&mut self) {
        let delay = self.ai_delay;
        self.ai_timer = Some(self.scheduler.schedule(delay));
        debug!("opponent acts in {delay:?}");
        self.emit(EngineEvent::OpponentScheduled { delay });
    }

    fn emit_turn(&mut self) {
        let event = EngineEvent::TurnChanged {
            turn: self.state.turn,
            accepting_input: self.accepting_player_input(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: EngineEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

/// Validate `config` and return its AI delay.
fn checked_delay(config: &GameConfig) -> Result<Duration, ConfigError> {
    config
        .validate()
        .and_then(|()| config.ai_response_delay())
        .inspect_err(|err| warn!("rejected configuration {config:?}: {err}"))
}

impl<R, P> std::fmt::Debug for DrinkEngine<R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrinkEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("message", &self.message)
            .field("ai_timer", &self.ai_timer)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
