//! Route guard gating protected views.
//!
//! # Responsibility
//! - Hold rendering while the session store is unresolved.
//! - Convert access-policy denials into replace-history redirects.
//! - Preserve the originally requested location for post-login return.
//!
//! # Invariants
//! - The guard reads the store's current state on every evaluation; it
//!   never caches a session across renders.
//! - Denied routes never remain in back-navigation history.
//! - Guard evaluation itself is infallible; the navigation call is
//!   fire-and-forget.

use crate::access::{evaluate, AccessDecision};
use crate::model::role::Role;
use crate::model::session::AuthState;
use crate::session::SessionStore;
use log::{debug, info};
use std::sync::Mutex;

/// Client-side router contract, implemented by the shell.
///
/// `navigate` with `replace = true` must not push the abandoned route onto
/// the history stack.
pub trait Navigator {
    fn navigate(&self, path: &str, replace: bool);
    fn current_path(&self) -> String;
}

/// Result of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session restore still in flight: render a neutral indicator, do not
    /// redirect, do not render the target.
    Loading,
    /// Access granted: render the protected target.
    Render,
    /// Access denied: a client-side navigation to `to` was requested.
    Redirected { to: String },
}

/// Single-slot memory of the location a login redirect came from.
///
/// The login flow may `take()` it to send the user back after success; it
/// is exposed but not required to be used.
#[derive(Debug, Default)]
pub struct ReturnTo {
    slot: Mutex<Option<String>>,
}

impl ReturnTo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the origin of a login redirect, replacing any older value.
    pub fn remember(&self, path: impl Into<String>) {
        *self.lock() = Some(path.into());
    }

    /// Consumes the remembered location.
    pub fn take(&self) -> Option<String> {
        self.lock().take()
    }

    /// Reads without consuming.
    pub fn peek(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Per-route access rule, attached when the route is registered and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    required_roles: Vec<Role>,
}

impl RouteGuard {
    /// Guard restricted to the given roles. An empty list admits any
    /// authenticated role.
    pub fn new(required_roles: impl Into<Vec<Role>>) -> Self {
        Self {
            required_roles: required_roles.into(),
        }
    }

    /// Guard that only requires authentication.
    pub fn any_authenticated() -> Self {
        Self::new(Vec::new())
    }

    pub fn required_roles(&self) -> &[Role] {
        &self.required_roles
    }

    /// Pure evaluation against the store's current state; no side effects.
    pub fn check(&self, store: &SessionStore) -> GuardOutcome {
        match self.decide(store) {
            None => GuardOutcome::Loading,
            Some(AccessDecision::Allow) => GuardOutcome::Render,
            Some(AccessDecision::Deny { redirect_to, .. }) => GuardOutcome::Redirected {
                to: redirect_to.to_string(),
            },
        }
    }

    /// Evaluation plus the redirect side effects.
    ///
    /// # Contract
    /// - `Loading` performs nothing.
    /// - On denial: remembers the current location first when the denial is
    ///   for missing authentication, then navigates with history replace.
    pub fn resolve(
        &self,
        store: &SessionStore,
        navigator: &dyn Navigator,
        return_to: &ReturnTo,
    ) -> GuardOutcome {
        let Some(decision) = self.decide(store) else {
            debug!("event=route_guard module=guard status=loading");
            return GuardOutcome::Loading;
        };

        match decision {
            AccessDecision::Allow => GuardOutcome::Render,
            AccessDecision::Deny {
                redirect_to,
                remember_location,
            } => {
                if remember_location {
                    return_to.remember(navigator.current_path());
                }
                info!(
                    "event=route_denied module=guard status=redirect from={} to={redirect_to}",
                    navigator.current_path()
                );
                navigator.navigate(redirect_to, true);
                GuardOutcome::Redirected {
                    to: redirect_to.to_string(),
                }
            }
        }
    }

    /// `None` while the store is unresolved.
    fn decide(&self, store: &SessionStore) -> Option<AccessDecision> {
        match store.auth_state() {
            AuthState::Uninitialized | AuthState::Loading => None,
            AuthState::Authenticated(session) => {
                Some(evaluate(Some(&session), &self.required_roles))
            }
            AuthState::Anonymous => Some(evaluate(None, &self.required_roles)),
        }
    }
}
