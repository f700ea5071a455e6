//! FFI use-case API for shell-facing calls.
//!
//! # Responsibility
//! - Expose the pure decision functions (landing routes, navigation,
//!   access, badge labels) to the UI shell via FRB.
//! - Keep error semantics simple for early-stage shell integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Role values cross as wire strings; an unparsable role degrades to the
//!   anonymous/unauthenticated behavior instead of throwing.

use medreserve_core::{
    badge_label as badge_label_inner, core_version as core_version_inner, default_landing_for,
    entries_for, evaluate_role, init_logging as init_logging_inner, parse_role,
    ping as ping_inner, AccessDecision, Role,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling log files.
///
/// # FFI contract
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success and an error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Default landing route for a role wire string.
///
/// # FFI contract
/// - Unknown role values return an empty string; the shell treats that as
///   a configuration error surfaced during development.
#[flutter_rust_bridge::frb(sync)]
pub fn default_landing(role: String) -> String {
    match parse_role(role.as_str()) {
        Ok(role) => default_landing_for(role).to_owned(),
        Err(_) => String::new(),
    }
}

/// Navigation entry projection for the shell menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntryDto {
    /// Stable discriminant for icon lookup and active-route highlighting.
    pub id: String,
    pub path: String,
    /// Translation key resolved by the shell's localization provider.
    pub label_key: String,
    pub icon: String,
}

/// Ordered navigation entries for a role wire string.
///
/// # FFI contract
/// - `None` or an unparsable role yields the public (anonymous) entry set.
/// - Order is stable across calls for the same input.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_entries(role: Option<String>) -> Vec<NavEntryDto> {
    let role = role.and_then(|value| parse_role(value.as_str()).ok());
    entries_for(role)
        .iter()
        .map(|entry| NavEntryDto {
            id: entry.id.as_str().to_owned(),
            path: entry.path.to_owned(),
            label_key: entry.label_key.to_owned(),
            icon: entry.icon.as_str().to_owned(),
        })
        .collect()
}

/// Access decision projection for the shell router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecisionDto {
    pub allow: bool,
    /// Redirect target when denied; empty when allowed.
    pub redirect_to: String,
    /// Whether the shell should preserve the current location for a
    /// post-login return.
    pub remember_location: bool,
}

/// Evaluates route access for a role wire string against required roles.
///
/// # FFI contract
/// - `role = None` or an unparsable value is treated as unauthenticated.
/// - Unknown strings in `required` are ignored; they cannot widen access
///   because unknown roles never match the session role.
#[flutter_rust_bridge::frb(sync)]
pub fn evaluate_access(role: Option<String>, required: Vec<String>) -> AccessDecisionDto {
    let session_role = role.and_then(|value| parse_role(value.as_str()).ok());
    let required_roles: Vec<Role> = required
        .iter()
        .filter_map(|value| parse_role(value.as_str()).ok())
        .collect();

    match evaluate_role(session_role, &required_roles) {
        AccessDecision::Allow => AccessDecisionDto {
            allow: true,
            redirect_to: String::new(),
            remember_location: false,
        },
        AccessDecision::Deny {
            redirect_to,
            remember_location,
        } => AccessDecisionDto {
            allow: false,
            redirect_to: redirect_to.to_owned(),
            remember_location,
        },
    }
}

/// Badge text for an unread count.
///
/// # FFI contract
/// - Returns empty string when no badge should render (count of zero).
/// - Counts above 99 return the capped literal `"99+"`.
#[flutter_rust_bridge::frb(sync)]
pub fn badge_label(unread_count: u64) -> String {
    badge_label_inner(unread_count).unwrap_or_default()
}
