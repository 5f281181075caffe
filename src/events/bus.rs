//! Publish/subscribe bus between the engine and the presentation layer.
//!
//! One bus is created per game session and dropped with it. Listeners are
//! only ever added; for a given kind they run in registration order.

use rustc_hash::FxHashMap;

use crate::round::DecisionTicket;

use super::notification::{EventKind, Notification};

type Listener = Box<dyn FnMut(&Notification)>;

/// Session-scoped event bus.
///
/// Besides delivering notifications, the bus issues the [`DecisionTicket`]s
/// that identify suspension points, so tickets are unique per session.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use rust_yahtzee::events::{ChangeReason, EventBus, EventKind, Notification};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut bus = EventBus::new();
///
/// let sink = Rc::clone(&seen);
/// bus.on(EventKind::StateChanged, move |n| sink.borrow_mut().push(n.reason));
///
/// bus.emit(Notification::state_changed(ChangeReason::GameStarted));
/// assert_eq!(*seen.borrow(), vec![ChangeReason::GameStarted]);
/// ```
#[derive(Default)]
pub struct EventBus {
    listeners: FxHashMap<EventKind, Vec<Listener>>,
    next_ticket: u64,
    emitted: u64,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `kind`.
    pub fn on(&mut self, kind: EventKind, listener: impl FnMut(&Notification) + 'static) {
        self.listeners
            .entry(kind)
            .or_default()
            .push(Box::new(listener));
    }

    /// Deliver a notification to every listener of its kind.
    pub fn emit(&mut self, notification: Notification) {
        self.emitted += 1;
        if let Some(listeners) = self.listeners.get_mut(&notification.kind) {
            for listener in listeners.iter_mut() {
                listener(&notification);
            }
        }
    }

    /// Issue the ticket for a new suspension point.
    pub fn issue_ticket(&mut self) -> DecisionTicket {
        self.next_ticket += 1;
        DecisionTicket(self.next_ticket)
    }

    /// Listeners registered for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Notifications emitted so far.
    #[must_use]
    pub fn emitted_count(&self) -> u64 {
        self.emitted
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count(EventKind::StateChanged))
            .field("next_ticket", &self.next_ticket)
            .field("emitted", &self.emitted)
            .finish()
    }
}
