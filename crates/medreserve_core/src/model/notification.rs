//! Unread-notification count snapshot.

use crate::model::session::UserId;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Server-reported unread count for one user.
///
/// # Invariants
/// - Replaced wholesale on every fetch; never partially updated.
/// - `unread_count` is the server's last-reported value, uncapped. Display
///   capping happens only at render time (`badge_label`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCount {
    /// Account this count belongs to.
    pub user_id: UserId,
    /// Last value reported by the notification service.
    pub unread_count: u64,
    /// Unix epoch milliseconds of the fetch that produced this snapshot.
    pub fetched_at_ms: i64,
}

impl NotificationCount {
    /// Builds a snapshot stamped with the current wall clock.
    pub fn now(user_id: UserId, unread_count: u64) -> Self {
        Self {
            user_id,
            unread_count,
            fetched_at_ms: epoch_millis(),
        }
    }
}

fn epoch_millis() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        // Pre-epoch clocks only happen on badly misconfigured hosts; a zero
        // stamp is still a valid "stale" marker.
        Err(_) => 0,
    }
}
