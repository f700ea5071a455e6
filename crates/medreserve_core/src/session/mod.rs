//! Session ownership: authentication state machine and collaborator seams.
//!
//! # Responsibility
//! - Hold the single process-wide authenticated identity.
//! - Drive the `Uninitialized -> Loading -> {Authenticated, Anonymous}`
//!   lifecycle through the authentication gateway.
//!
//! # Invariants
//! - Only this module mutates session state; everyone else reads snapshots.
//! - Failed logins never change state.
//! - Logout takes effect synchronously.

mod auth_spi;
mod store;

pub use auth_spi::{AuthError, AuthGateway, AuthGrant, AuthResult, RegisterRequest, TokenStore};
pub use store::SessionStore;
