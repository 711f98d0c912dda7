//! Shell event bus.
//!
//! Synchronous, single-threaded event distribution for the shell:
//! workspace-selection notifications, login-state changes, and crash
//! reports. Handlers run inline on the event-dispatch thread, in
//! registration order, and a published event is fully delivered before
//! the publisher regains control.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

/// Subscription handle for unsubscribing from shell events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.to_string()[..8])
    }
}

/// Events emitted by the shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ShellEvent {
    /// The active workspace tab changed
    WorkspaceSelected {
        /// Index of the newly active workspace.
        index: usize,
    },
    /// The active workspace's pan offset was (re-)announced
    OffsetChanged {
        /// Pan offset X in canvas units.
        x: f64,
        /// Pan offset Y in canvas units.
        y: f64,
    },
    /// The active workspace's zoom factor was (re-)announced
    ZoomChanged {
        /// Zoom factor (positive).
        zoom: f64,
    },
    /// Package-manager login state changed
    LoginStateChanged {
        /// Display text, applied verbatim to the status display.
        text: String,
        /// Whether the login button is enabled.
        enabled: bool,
    },
    /// An unhandled fault was reported by a lower layer
    ///
    /// Diagnostic only: presenting it never changes the shell lifecycle
    /// state.
    CrashReported {
        /// Fault message.
        message: String,
        /// Fault detail (stack trace or equivalent).
        details: String,
        /// When the fault was reported.
        timestamp: DateTime<Utc>,
    },
}

impl ShellEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            ShellEvent::WorkspaceSelected { .. }
            | ShellEvent::OffsetChanged { .. }
            | ShellEvent::ZoomChanged { .. } => EventCategory::Workspace,
            ShellEvent::LoginStateChanged { .. } => EventCategory::Account,
            ShellEvent::CrashReported { .. } => EventCategory::Diagnostics,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            ShellEvent::WorkspaceSelected { index } => {
                format!("Workspace {} selected", index)
            }
            ShellEvent::OffsetChanged { x, y } => format!("Offset ({:.1}, {:.1})", x, y),
            ShellEvent::ZoomChanged { zoom } => format!("Zoom {:.2}", zoom),
            ShellEvent::LoginStateChanged { text, enabled } => {
                format!("Login '{}' (enabled: {})", text, enabled)
            }
            ShellEvent::CrashReported { message, .. } => format!("Crash: {}", message),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Workspace selection, offset, and zoom events.
    Workspace,
    /// Package-manager account events.
    Account,
    /// Crash and diagnostic events.
    Diagnostics,
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
    pub fn matches(&self, event: &ShellEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

/// Type alias for event handler functions
type EventHandler = Box<dyn Fn(&ShellEvent) + Send + Sync>;

/// Central event bus for shell-wide event distribution.
///
/// Cheap to clone; clones share the same handler table. Delivery is
/// synchronous and ordered: `publish` returns only after every matching
/// handler has run.
#[derive(Clone, Default)]
pub struct ShellEventBus {
    // BTreeMap keeps delivery order stable across publishes.
    handlers: Arc<RwLock<BTreeMap<SubscriptionId, (EventFilter, EventHandler)>>>,
}

impl ShellEventBus {
    /// Create a new event bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler for events matching `filter`
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&ShellEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId::new();
        self.handlers
            .write()
            .insert(id, (filter, Box::new(handler)));
        id
    }

    /// Remove a subscription. Returns true if it existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers.write().remove(&id).is_some()
    }

    /// Publish an event to all matching subscribers
    ///
    /// Returns the number of handlers that received the event.
    pub fn publish(&self, event: &ShellEvent) -> usize {
        tracing::trace!(event = %event.description(), "shell event");
        let handlers = self.handlers.read();
        let mut delivered = 0;
        for (filter, handler) in handlers.values() {
            if filter.matches(event) {
                handler(event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of registered subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}
