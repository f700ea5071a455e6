//! Notification badge state: polling, event-driven refresh, display rule.
//!
//! # Responsibility
//! - Keep an approximately-fresh unread count for the current user.
//! - Fan application-wide "notifications changed" signals into refreshes.
//!
//! # Invariants
//! - At most one polling task exists at a time.
//! - A failed fetch resets the displayed count to zero and is retried at
//!   the next scheduled tick; it never surfaces to the user.
//! - The stored count is never capped; only `badge_label` caps rendering.

mod badge;
mod events;
mod spi;

pub use badge::{badge_label, BadgeSynchronizer, BADGE_DISPLAY_CAP, BADGE_POLL_PERIOD};
pub use events::{AppEvent, AppEventBus};
pub use spi::{NotificationGateway, NotifyError, NotifyResult};
