//! Deferred actions on a logical clock.
//!
//! The host's frame loop feeds elapsed time into [`Scheduler::advance`];
//! nothing here sleeps or spawns threads. Every timer carries the
//! scheduler's generation at the moment it was armed, and
//! [`Scheduler::cancel`] bumps the generation, so a handle from before a
//! cancel can never fire.

pub mod timer;

pub use timer::{Scheduler, TimerHandle};
