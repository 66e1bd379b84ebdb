//! Observer interface and a recording observer.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::EngineEvent;

/// Receives every event the engine emits, in order.
pub trait EngineObserver {
    fn on_event(&mut self, event: &EngineEvent);
}

impl<F: FnMut(&EngineEvent)> EngineObserver for F {
    fn on_event(&mut self, event: &EngineEvent) {
        self(event)
    }
}

/// Records events into a shared buffer.
///
/// Clones share the buffer: hand one clone to the engine and read
/// through another.
///
/// ```
/// use drink_roulette::{DrinkEngine, EventLog, GameConfig, GameRng};
///
/// let log = EventLog::new();
/// let mut engine = DrinkEngine::new(GameConfig::default(), GameRng::new(1)).unwrap();
/// engine.subscribe(Box::new(log.clone()));
/// engine.restart();
/// assert!(!log.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<EngineEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EngineObserver for EventLog {
    fn on_event(&mut self, event: &EngineEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
