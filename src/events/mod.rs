//! Engine events and the observer interface.
//!
//! The engine never touches presentation types. Every state change is
//! pushed to registered [`EngineObserver`]s as an [`EngineEvent`]; a UI
//! renders hit points, batch counts and a [`ResultMessage`] from those,
//! and shows its drink/pass controls while `accepting_input` is true.

pub mod event;
pub mod observer;

pub use event::{EngineEvent, ResultMessage};
pub use observer::{EngineObserver, EventLog};
