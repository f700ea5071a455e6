//! Non-blocking dialog surface replacing native blocking alerts.
//!
//! # Responsibility
//! - Queue informational and confirmation dialogs, one visible at a time.
//! - Offer a legacy adapter for call sites ported from blocking
//!   `alert`/`confirm` usage.
//!
//! # Invariants
//! - `notify` is the only informational enqueue surface.
//! - A second dialog raised while one is open queues FIFO behind it; the
//!   prior dialog is never replaced.
//! - The legacy sink override is restored deterministically when its guard
//!   drops, so nothing leaks into later code or tests.

mod center;
pub mod legacy;

pub use center::{ConfirmRequest, Dialog, DialogCenter, DialogKind};
