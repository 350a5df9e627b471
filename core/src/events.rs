// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicit event bus for game and computation notifications.
//!
//! Views register interest per [`EventKind`] and get a [`SubscriptionId`]
//! back, which they must hand to [`EventBus::unsubscribe`] when they detach.
//! The bus belongs to the thread that created it: events published from any
//! other thread are dropped, not queued or retried.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};

/// Long-running work performed outside the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Computation {
    /// The computer player is choosing a move
    Thinking,
    /// The final score is being calculated
    Scoring,
}

/// Notifications the play view reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A new game was created; board size may differ from the previous game
    NewGame { board_size: u8 },
    /// Stones or game phase changed
    GameStateChanged,
    /// The first or last move of the game changed
    LastMoveChanged,
    /// An external computation started
    ComputationStarted(Computation),
    /// An external computation finished
    ComputationStopped(Computation),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::NewGame { .. } => EventKind::NewGame,
            Event::GameStateChanged => EventKind::GameStateChanged,
            Event::LastMoveChanged => EventKind::LastMoveChanged,
            Event::ComputationStarted(_) => EventKind::ComputationStarted,
            Event::ComputationStopped(_) => EventKind::ComputationStopped,
        }
    }
}

/// Discriminant used when subscribing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    NewGame,
    GameStateChanged,
    LastMoveChanged,
    ComputationStarted,
    ComputationStopped,
}

impl EventKind {
    /// Every kind, in declaration order
    pub const ALL: [EventKind; 5] = [
        EventKind::NewGame,
        EventKind::GameStateChanged,
        EventKind::LastMoveChanged,
        EventKind::ComputationStarted,
        EventKind::ComputationStopped,
    ];
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(&Event) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    kind: EventKind,
    callback: Callback,
}

/// Synchronous fan-out of [`Event`]s to registered callbacks
pub struct EventBus {
    owner: ThreadId,
    next_id: AtomicU64,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl EventBus {
    /// Create a bus owned by the calling thread
    pub fn new() -> Self {
        Self {
            owner: thread::current().id(),
            next_id: AtomicU64::new(1),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register `callback` for events of `kind`
    pub fn subscribe<F>(&self, kind: EventKind, callback: F) -> SubscriptionId
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().push(Subscriber {
            id,
            kind,
            callback: Arc::new(callback),
        });
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Deliver `event` to every subscriber of its kind, in subscription order.
    ///
    /// Returns the number of callbacks invoked. Calls from a thread other than
    /// the owner are ignored and return 0.
    pub fn publish(&self, event: &Event) -> usize {
        if thread::current().id() != self.owner {
            tracing::debug!("Dropping {:?} published off the owning thread", event);
            return 0;
        }

        // Callbacks run without the lock held so they may (un)subscribe.
        let kind = event.kind();
        let callbacks: Vec<Callback> = self
            .subscribers
            .lock()
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| Arc::clone(&s.callback))
            .collect();

        for callback in &callbacks {
            callback(event);
        }
        callbacks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
