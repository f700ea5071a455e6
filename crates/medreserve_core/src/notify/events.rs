//! Typed application event bus.
//!
//! Replaces ad hoc global event names with one closed event enum on a
//! broadcast channel: any component may publish, any number may subscribe.

use crate::model::session::UserId;
use tokio::sync::broadcast;

const EVENT_BUS_CAPACITY: usize = 16;

/// Application-wide broadcast signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Notification read-state changed somewhere in the UI; badge counts
    /// for this user should refresh outside the regular cadence.
    NotificationsChanged { user_id: UserId },
}

/// Cheap-to-clone handle to the process-wide event channel.
#[derive(Debug, Clone)]
pub struct AppEventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl AppEventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUS_CAPACITY);
        Self { sender }
    }

    /// Publishes one event; returns the number of live subscribers.
    ///
    /// Publishing with no subscribers is not an error.
    pub fn publish(&self, event: AppEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for AppEventBus {
    fn default() -> Self {
        Self::new()
    }
}
