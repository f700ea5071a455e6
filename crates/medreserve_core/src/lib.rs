//! Client core for the MedReserve appointment reservation frontend.
//! This crate is the single source of truth for session, access and
//! notification-badge invariants; the UI shell renders what it decides.

pub mod access;
pub mod dialog;
pub mod guard;
pub mod logging;
pub mod model;
pub mod nav;
pub mod notify;
pub mod session;

pub use access::{
    default_landing_for, evaluate, evaluate_role, AccessDecision, ADMIN_DASHBOARD_PATH,
    DOCTOR_DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, PATIENT_DASHBOARD_PATH,
};
pub use dialog::{ConfirmRequest, Dialog, DialogCenter, DialogKind};
pub use guard::{GuardOutcome, Navigator, ReturnTo, RouteGuard};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::notification::NotificationCount;
pub use model::role::{parse_role, supported_role_strings, Role, RoleParseError};
pub use model::session::{AuthState, Session, UserId};
pub use nav::{entries_for, IconTag, NavEntry, NavItemId};
pub use notify::{
    badge_label, AppEvent, AppEventBus, BadgeSynchronizer, NotificationGateway, NotifyError,
    NotifyResult, BADGE_DISPLAY_CAP, BADGE_POLL_PERIOD,
};
pub use session::{
    AuthError, AuthGateway, AuthGrant, AuthResult, RegisterRequest, SessionStore, TokenStore,
};

/// Minimal health-check API for early shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
