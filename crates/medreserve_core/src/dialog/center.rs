//! Dialog queue and confirmation decision plumbing.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::oneshot;

/// Visual category of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    Info,
    Success,
    Warning,
    Error,
}

/// One dialog as the shell renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub kind: DialogKind,
}

struct PendingDialog {
    dialog: Dialog,
    /// Present for confirmations; resolved by the shell's yes/no buttons.
    decision: Option<oneshot::Sender<bool>>,
}

#[derive(Default)]
struct CenterState {
    active: Option<PendingDialog>,
    pending: VecDeque<PendingDialog>,
}

/// In-flight confirmation handed back to the requesting call site.
///
/// Resolves to the user's real decision; a dismissed or dropped dialog
/// resolves to `false`.
pub struct ConfirmRequest {
    receiver: oneshot::Receiver<bool>,
}

impl ConfirmRequest {
    pub async fn decision(self) -> bool {
        self.receiver.await.unwrap_or(false)
    }
}

/// Application-root dialog provider.
///
/// An explicit injected object rather than a process-wide monkey-patch:
/// construction installs nothing, and dropping it tears everything down
/// with no global residue. One dialog is visible at a time; later arrivals
/// queue FIFO.
#[derive(Default)]
pub struct DialogCenter {
    state: Mutex<CenterState>,
}

impl DialogCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows (or queues) a dismissible informational dialog.
    ///
    /// Non-blocking: returns before the user has seen or dismissed
    /// anything.
    pub fn notify(&self, title: impl Into<String>, message: impl Into<String>, kind: DialogKind) {
        self.enqueue(PendingDialog {
            dialog: Dialog {
                title: title.into(),
                message: message.into(),
                kind,
            },
            decision: None,
        });
    }

    /// Shows (or queues) a confirmation dialog and returns its pending
    /// decision.
    ///
    /// The shell answers through [`DialogCenter::resolve_confirm`]; the
    /// returned request then yields the user's actual choice.
    pub fn confirm(&self, title: impl Into<String>, message: impl Into<String>) -> ConfirmRequest {
        let (sender, receiver) = oneshot::channel();
        self.enqueue(PendingDialog {
            dialog: Dialog {
                title: title.into(),
                message: message.into(),
                kind: DialogKind::Warning,
            },
            decision: Some(sender),
        });
        ConfirmRequest { receiver }
    }

    /// Currently visible dialog, if any.
    pub fn active(&self) -> Option<Dialog> {
        self.lock().active.as_ref().map(|entry| entry.dialog.clone())
    }

    /// Whether the visible dialog awaits a yes/no decision.
    pub fn active_is_confirm(&self) -> bool {
        self.lock()
            .active
            .as_ref()
            .is_some_and(|entry| entry.decision.is_some())
    }

    /// Number of dialogs queued behind the visible one.
    pub fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    /// Closes the visible dialog and promotes the next queued one.
    ///
    /// Dismissing a confirmation counts as declining it.
    pub fn dismiss_active(&self) {
        let mut state = self.lock();
        if let Some(entry) = state.active.take() {
            if let Some(sender) = entry.decision {
                let _ = sender.send(false);
            }
        }
        Self::promote(&mut state);
    }

    /// Answers the visible confirmation and promotes the next dialog.
    ///
    /// Returns `false` (and changes nothing) when the visible dialog is
    /// not a confirmation.
    pub fn resolve_confirm(&self, accepted: bool) -> bool {
        let mut state = self.lock();
        let is_confirm = state
            .active
            .as_ref()
            .is_some_and(|entry| entry.decision.is_some());
        if !is_confirm {
            return false;
        }

        if let Some(entry) = state.active.take() {
            if let Some(sender) = entry.decision {
                let _ = sender.send(accepted);
            }
        }
        Self::promote(&mut state);
        true
    }

    fn enqueue(&self, entry: PendingDialog) {
        let mut state = self.lock();
        if state.active.is_none() {
            debug!(
                "event=dialog_show module=dialog kind={:?} title={}",
                entry.dialog.kind, entry.dialog.title
            );
            state.active = Some(entry);
        } else {
            debug!(
                "event=dialog_queue module=dialog kind={:?} depth={}",
                entry.dialog.kind,
                state.pending.len() + 1
            );
            state.pending.push_back(entry);
        }
    }

    fn promote(state: &mut CenterState) {
        state.active = state.pending.pop_front();
    }

    fn lock(&self) -> MutexGuard<'_, CenterState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::{DialogCenter, DialogKind};

    #[test]
    fn notify_shows_immediately_when_idle() {
        let center = DialogCenter::new();
        center.notify("Saved", "Appointment booked.", DialogKind::Success);

        let active = center.active().expect("dialog is visible");
        assert_eq!(active.title, "Saved");
        assert_eq!(active.kind, DialogKind::Success);
        assert_eq!(center.pending_len(), 0);
    }

    #[test]
    fn later_dialogs_queue_fifo_behind_the_visible_one() {
        let center = DialogCenter::new();
        center.notify("First", "1", DialogKind::Info);
        center.notify("Second", "2", DialogKind::Info);
        center.notify("Third", "3", DialogKind::Warning);

        assert_eq!(center.active().expect("visible").title, "First");
        assert_eq!(center.pending_len(), 2);

        center.dismiss_active();
        assert_eq!(center.active().expect("visible").title, "Second");

        center.dismiss_active();
        assert_eq!(center.active().expect("visible").title, "Third");

        center.dismiss_active();
        assert!(center.active().is_none());
        assert_eq!(center.pending_len(), 0);
    }

    #[tokio::test]
    async fn confirm_resolves_the_real_decision() {
        let center = DialogCenter::new();
        let request = center.confirm("Cancel appointment", "Really cancel?");
        assert!(center.active_is_confirm());

        assert!(center.resolve_confirm(true));
        assert!(request.decision().await);
    }

    #[tokio::test]
    async fn dismissing_a_confirmation_declines_it() {
        let center = DialogCenter::new();
        let request = center.confirm("Cancel appointment", "Really cancel?");

        center.dismiss_active();
        assert!(!request.decision().await);
        assert!(center.active().is_none());
    }

    #[tokio::test]
    async fn dropped_center_resolves_pending_confirms_to_false() {
        let center = DialogCenter::new();
        let request = center.confirm("Cancel appointment", "Really cancel?");
        drop(center);
        assert!(!request.decision().await);
    }

    #[test]
    fn resolve_confirm_rejects_informational_dialogs() {
        let center = DialogCenter::new();
        center.notify("Notice", "FYI", DialogKind::Info);
        assert!(!center.resolve_confirm(true));
        assert_eq!(center.active().expect("still visible").title, "Notice");
    }
}
