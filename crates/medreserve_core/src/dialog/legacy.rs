//! Compatibility adapter for blocking-style `alert`/`confirm` call sites.
//!
//! # Responsibility
//! - Route legacy free-function calls into the installed [`DialogCenter`].
//! - Restore the previously installed sink when the guard drops.
//!
//! # Invariants
//! - Installation is explicit and scoped; dropping the guard always puts
//!   the prior sink back, so tests never leak the override.
//! - `confirm` here reports affirmative without awaiting a decision. That
//!   deviation from true confirm semantics is intentional for ported call
//!   sites only; anything that needs a real answer must use
//!   [`DialogCenter::confirm`].

use crate::dialog::center::{DialogCenter, DialogKind};
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

/// Title used for intercepted alert calls.
pub const LEGACY_ALERT_TITLE: &str = "System Notice";
/// Title used for intercepted confirm calls.
pub const LEGACY_CONFIRM_TITLE: &str = "Confirmation";

static SINK: Lazy<RwLock<Option<Arc<DialogCenter>>>> = Lazy::new(|| RwLock::new(None));

/// Restores the previously installed sink on drop.
pub struct SinkGuard {
    previous: Option<Arc<DialogCenter>>,
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        *write_sink() = self.previous.take();
    }
}

/// Installs `center` as the process alert sink for the guard's lifetime.
///
/// Nested installs restore in reverse order as their guards drop.
pub fn install_alert_sink(center: Arc<DialogCenter>) -> SinkGuard {
    let previous = write_sink().replace(center);
    SinkGuard { previous }
}

/// Non-blocking replacement for a blocking alert call.
///
/// Returns before the dialog is dismissed; callers that assumed blocking
/// semantics observe different timing.
pub fn alert(message: impl Into<String>) {
    let message = message.into();
    match current_sink() {
        Some(center) => center.notify(LEGACY_ALERT_TITLE, message, DialogKind::Warning),
        None => warn!("event=legacy_alert module=dialog status=dropped message={message}"),
    }
}

/// Non-blocking replacement for a blocking confirm call.
///
/// Shows the dialog and reports affirmative immediately; no decision is
/// awaited. Not suitable for guarding destructive actions.
pub fn confirm(message: impl Into<String>) -> bool {
    let message = message.into();
    match current_sink() {
        Some(center) => {
            center.notify(LEGACY_CONFIRM_TITLE, message, DialogKind::Warning);
        }
        None => warn!("event=legacy_confirm module=dialog status=dropped message={message}"),
    }
    debug!("event=legacy_confirm module=dialog status=affirmative");
    true
}

fn current_sink() -> Option<Arc<DialogCenter>> {
    SINK.read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

fn write_sink() -> RwLockWriteGuard<'static, Option<Arc<DialogCenter>>> {
    SINK.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
