//! Session identity and authentication lifecycle state.
//!
//! # Invariants
//! - `Session` values are immutable snapshots; only the session store
//!   replaces them.
//! - `AuthState` resolves exactly once per process:
//!   `Uninitialized -> Loading -> {Authenticated, Anonymous}`. Only a full
//!   restart re-enters `Loading`.

use crate::model::role::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an authenticated account.
pub type UserId = Uuid;

/// Authenticated identity snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Stable account id used for notification scoping and auditing.
    pub user_id: UserId,
    /// Account email, also the login principal.
    pub email: String,
    /// Display name shown in the navigation chrome.
    pub display_name: String,
    /// Permission class for route and menu decisions.
    pub role: Role,
}

impl Session {
    pub fn new(
        user_id: UserId,
        email: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            display_name: display_name.into(),
            role,
        }
    }
}

/// Authentication lifecycle state.
///
/// `Loading` is distinct from `Anonymous`: while a persisted token is being
/// re-validated the guard must hold rendering instead of redirecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Store constructed, restore not yet attempted.
    Uninitialized,
    /// Token restore in flight.
    Loading,
    /// Confirmed identity.
    Authenticated(Session),
    /// Confirmed unauthenticated.
    Anonymous,
}

impl AuthState {
    /// Returns the session when authenticated.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Uninitialized | Self::Loading | Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether the restore flow has reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Authenticated(_) | Self::Anonymous)
    }
}
