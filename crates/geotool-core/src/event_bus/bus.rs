//! Input bus implementation.
//!
//! A single-threaded take on a publish/subscribe bus: handlers run on the
//! publishing call, strictly in subscription order, and an unsubscribed
//! handler is never invoked again, even for an event that is mid-dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use super::events::{EventCategory, InputEvent};

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Create a new unique subscription ID
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Filter to receive only specific event types
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    /// Receive all events.
    #[default]
    All,
    /// Receive events matching any of these categories.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    /// Check if an event matches this filter
    pub fn matches(&self, event: &InputEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type EventHandler = Rc<dyn Fn(&InputEvent)>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: EventHandler,
}

/// Host-side input channel feeding the scene engine
#[derive(Default)]
pub struct InputBus {
    subscriptions: RefCell<Vec<Subscription>>,
}

impl InputBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events with a synchronous handler
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&InputEvent) + 'static,
    {
        let id = SubscriptionId::new();
        self.subscriptions.borrow_mut().push(Subscription {
            id,
            filter,
            handler: Rc::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Unsubscribe from events
    ///
    /// Returns true if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.borrow_mut();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        let removed = subscriptions.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscriptions.borrow().iter().any(|s| s.id == id)
    }

    /// Get the number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    /// Publish an event to every matching subscriber.
    ///
    /// Returns the number of handlers that received the event.
    pub fn publish(&self, event: InputEvent) -> usize {
        // Snapshot the matching handlers so that handlers may (un)subscribe
        // without hitting a RefCell borrow conflict.
        let targets: Vec<(SubscriptionId, EventHandler)> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.filter.matches(&event))
            .map(|s| (s.id, Rc::clone(&s.handler)))
            .collect();

        let mut delivered = 0;
        for (id, handler) in targets {
            if !self.is_subscribed(id) {
                continue;
            }
            handler(&event);
            delivered += 1;
        }

        if delivered == 0 {
            tracing::trace!("No subscriber for {}", event.description());
        }
        delivered
    }
}

impl std::fmt::Debug for InputBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
