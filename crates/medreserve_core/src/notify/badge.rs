//! Unread-badge synchronizer: fixed-cadence polling plus event refresh.

use crate::model::notification::NotificationCount;
use crate::model::session::UserId;
use crate::notify::events::{AppEvent, AppEventBus};
use crate::notify::spi::NotificationGateway;
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::interval;

/// Fixed polling cadence for the unread count.
pub const BADGE_POLL_PERIOD: Duration = Duration::from_secs(30);
/// Largest count rendered exactly; anything above renders as `"99+"`.
pub const BADGE_DISPLAY_CAP: u64 = 99;

/// Render rule for the unread badge.
///
/// # Contract
/// - `0` -> `None`: no badge is rendered at all (chosen convention).
/// - `1..=99` -> the exact number.
/// - `>= 100` -> the capped literal `"99+"`.
///
/// The underlying stored count is never capped, only its rendering.
pub fn badge_label(unread_count: u64) -> Option<String> {
    if unread_count == 0 {
        None
    } else if unread_count <= BADGE_DISPLAY_CAP {
        Some(unread_count.to_string())
    } else {
        Some(format!("{BADGE_DISPLAY_CAP}+"))
    }
}

struct BadgeShared {
    gateway: Arc<dyn NotificationGateway>,
    current: RwLock<Option<NotificationCount>>,
}

impl BadgeShared {
    fn replace(&self, snapshot: Option<NotificationCount>) {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = snapshot;
    }

    fn snapshot(&self) -> Option<NotificationCount> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

struct PollTask {
    user_id: UserId,
    handle: JoinHandle<()>,
}

/// Maintains the unread count for the navigation chrome.
///
/// Owns the one recurring timer in this crate; `stop()` on teardown or
/// logout is mandatory, otherwise the task keeps fetching for a stale or
/// absent user.
pub struct BadgeSynchronizer {
    shared: Arc<BadgeShared>,
    events: AppEventBus,
    poll: Mutex<Option<PollTask>>,
}

impl BadgeSynchronizer {
    pub fn new(gateway: Arc<dyn NotificationGateway>, events: AppEventBus) -> Self {
        Self {
            shared: Arc::new(BadgeShared {
                gateway,
                current: RwLock::new(None),
            }),
            events,
            poll: Mutex::new(None),
        }
    }

    /// Begins recurring fetches for `user_id`: one immediately, then every
    /// [`BADGE_POLL_PERIOD`], plus event-driven refreshes from the bus.
    ///
    /// # Contract
    /// - Idempotent for the running `user_id`: no duplicate timers.
    /// - A different `user_id` cancels the previous task and discards its
    ///   count before the new task starts.
    pub fn start(&self, user_id: UserId) {
        let mut poll = self.lock_poll();
        if let Some(task) = poll.as_ref() {
            if task.user_id == user_id && !task.handle.is_finished() {
                debug!("event=badge_start module=notify status=noop user_id={user_id}");
                return;
            }
        }
        if let Some(previous) = poll.take() {
            previous.handle.abort();
            self.shared.replace(None);
        }

        debug!("event=badge_start module=notify status=ok user_id={user_id}");
        let handle = tokio::spawn(poll_loop(
            Arc::clone(&self.shared),
            self.events.subscribe(),
            user_id,
        ));
        *poll = Some(PollTask { user_id, handle });
    }

    /// Cancels the recurring fetch and clears the displayed count.
    ///
    /// Must be called when the owning view is torn down or on logout.
    pub fn stop(&self) {
        let mut poll = self.lock_poll();
        if let Some(task) = poll.take() {
            task.handle.abort();
            self.shared.replace(None);
            debug!("event=badge_stop module=notify status=ok user_id={}", task.user_id);
        }
    }

    /// One immediate fetch outside the regular cadence.
    ///
    /// No-op when polling has not been started.
    pub async fn refresh_now(&self) {
        let user_id = {
            let poll = self.lock_poll();
            match poll.as_ref() {
                Some(task) => task.user_id,
                None => {
                    debug!("event=badge_refresh module=notify status=noop");
                    return;
                }
            }
        };
        fetch_once(&self.shared, user_id).await;
    }

    /// Currently displayed count; zero before the first fetch resolves.
    pub fn count(&self) -> u64 {
        self.shared
            .snapshot()
            .map_or(0, |snapshot| snapshot.unread_count)
    }

    /// Full snapshot including the fetch timestamp.
    pub fn snapshot(&self) -> Option<NotificationCount> {
        self.shared.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.lock_poll()
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished())
    }

    /// User the running task polls for, if any.
    pub fn active_user(&self) -> Option<UserId> {
        self.lock_poll().as_ref().map(|task| task.user_id)
    }

    fn lock_poll(&self) -> MutexGuard<'_, Option<PollTask>> {
        self.poll.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for BadgeSynchronizer {
    fn drop(&mut self) {
        if let Some(task) = self.lock_poll().take() {
            task.handle.abort();
        }
    }
}

async fn poll_loop(
    shared: Arc<BadgeShared>,
    mut events: broadcast::Receiver<AppEvent>,
    user_id: UserId,
) {
    let mut ticker = interval(BADGE_POLL_PERIOD);
    let mut bus_open = true;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                fetch_once(&shared, user_id).await;
            }
            event = events.recv(), if bus_open => match event {
                Ok(AppEvent::NotificationsChanged { user_id: changed }) => {
                    if changed == user_id {
                        fetch_once(&shared, user_id).await;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Missed signals; the count may be stale, so refresh.
                    warn!(
                        "event=badge_bus module=notify status=lagged skipped={skipped} user_id={user_id}"
                    );
                    fetch_once(&shared, user_id).await;
                }
                Err(broadcast::error::RecvError::Closed) => {
                    bus_open = false;
                }
            },
        }
    }
}

async fn fetch_once(shared: &Arc<BadgeShared>, user_id: UserId) {
    match shared.gateway.unread_count(user_id).await {
        Ok(unread_count) => {
            debug!(
                "event=badge_fetch module=notify status=ok user_id={user_id} count={unread_count}"
            );
            shared.replace(Some(NotificationCount::now(user_id, unread_count)));
        }
        Err(err) => {
            // Safe default until the next scheduled tick retries.
            warn!("event=badge_fetch module=notify status=error user_id={user_id} error={err}");
            shared.replace(Some(NotificationCount::now(user_id, 0)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{badge_label, BADGE_DISPLAY_CAP};

    #[test]
    fn zero_renders_no_badge() {
        assert_eq!(badge_label(0), None);
    }

    #[test]
    fn counts_up_to_the_cap_render_exactly() {
        assert_eq!(badge_label(1).as_deref(), Some("1"));
        assert_eq!(badge_label(42).as_deref(), Some("42"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
    }

    #[test]
    fn counts_above_the_cap_render_the_capped_literal() {
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
        assert_eq!(badge_label(BADGE_DISPLAY_CAP + 1).as_deref(), Some("99+"));
        assert_eq!(badge_label(u64::MAX).as_deref(), Some("99+"));
    }
}
