//! Event bus: how the engine announces state changes and awaited decisions.
//!
//! ## Key Components
//!
//! - [`EventKind`]: subscribable kinds (only "state changed")
//! - [`Notification`]: one published change, optionally carrying a
//!   [`DecisionOffer`](crate::round::DecisionOffer)
//! - [`EventBus`]: listener registry, owned by one game session
//!
//! Listeners observe; they never call back into the game while a
//! notification is being delivered. Decisions are fed in afterwards through
//! `Game::resolve`.

mod bus;
mod notification;

pub use bus::EventBus;
pub use notification::{ChangeReason, EventKind, Notification};
