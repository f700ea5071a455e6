//! Role-based access decisions and landing routes.
//!
//! # Responsibility
//! - Decide allow/deny for a (session, required roles) pair.
//! - Map every role to exactly one default landing route.
//!
//! # Invariants
//! - Decision functions are pure: no I/O, no store reads, no clock.
//! - Denial for an authenticated session redirects to the user's own
//!   landing route, never to the login page and never to an error view.

mod policy;

pub use policy::{
    default_landing_for, evaluate, evaluate_role, AccessDecision, ADMIN_DASHBOARD_PATH,
    DOCTOR_DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, PATIENT_DASHBOARD_PATH,
};
