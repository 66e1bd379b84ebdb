//! Single-slot cancellable timer.

use std::time::Duration;

use log::trace;

/// Token for an armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    generation: u64,
    /// `None` when the deadline lies past the end of the clock.
    due: Option<Duration>,
}

impl TimerHandle {
    /// Generation the timer was armed in.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Logical time at which the timer fires, `None` if it never can.
    #[must_use]
    pub fn due(&self) -> Option<Duration> {
        self.due
    }
}

/// Logical clock with at most one pending timer.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    generation: u64,
    pending: Option<TimerHandle>,
}

impl Scheduler {
    /// Empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The armed timer, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }

    /// Time left until the armed timer fires.
    ///
    /// A timer that can never fire reports `Duration::MAX`.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.pending
            .map(|t| t.due.map_or(Duration::MAX, |due| due.saturating_sub(self.now)))
    }

    /// Arm a timer `delay` from now, replacing any pending one.
    ///
    /// A deadline past `Duration::MAX` is armed but never fires.
    pub fn schedule(&mut self, delay: Duration) -> TimerHandle {
        if self.pending.is_some() {
            self.cancel();
        }
        let handle = TimerHandle {
            generation: self.generation,
            due: self.now.checked_add(delay),
        };
        trace!("timer armed: gen {} due at {:?}", handle.generation, handle.due);
        self.pending = Some(handle);
        handle
    }

    /// Drop the pending timer and invalidate every handle issued so far.
    pub fn cancel(&mut self) {
        if let Some(stale) = self.pending.take() {
            trace!("timer cancelled: gen {}", stale.generation);
        }
        self.generation += 1;
    }

    /// True if `handle` is still the armed timer.
    #[must_use]
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.pending == Some(handle) && handle.generation == self.generation
    }

    /// Move the clock forward by `dt`. The clock stops at `Duration::MAX`.
    ///
    /// Returns the pending timer if it came due; it is disarmed but keeps
    /// its generation until the next `cancel`.
    pub fn advance(&mut self, dt: Duration) -> Option<TimerHandle> {
        self.now = self.now.saturating_add(dt);
        match self.pending {
            Some(handle)
                if handle.due.is_some_and(|due| due <= self.now)
                    && handle.generation == self.generation =>
            {
                self.pending = None;
                trace!("timer fired: gen {} at {:?}", handle.generation, self.now);
                Some(handle)
            }
            _ => None,
        }
    }
}
