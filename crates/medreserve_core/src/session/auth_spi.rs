//! Authentication collaborator contracts.
//!
//! The core does not own an HTTP client or a browser storage API; the shell
//! implements these traits over whatever transport and storage it has.

use crate::model::session::Session;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AuthResult<T> = Result<T, AuthError>;

/// Typed authentication failure surfaced to the login form.
///
/// Never escapes as a panic into the rendering layer; callers match on the
/// variant to choose inline form text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Credentials rejected by the backend.
    InvalidCredentials,
    /// Persisted token exists but is past its expiry.
    TokenExpired,
    /// Persisted token is malformed or was revoked.
    TokenInvalid,
    /// Transport-level failure before a server verdict.
    Network(String),
    /// Server-side rejection with a human-readable reason.
    Server { message: String },
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid email or password"),
            Self::TokenExpired => write!(f, "session token expired"),
            Self::TokenInvalid => write!(f, "session token is invalid"),
            Self::Network(details) => write!(f, "network failure: {details}"),
            Self::Server { message } => write!(f, "server rejected request: {message}"),
        }
    }
}

impl Error for AuthError {}

/// Successful authentication payload: the bearer token plus the identity
/// decoded from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub token: String,
    pub session: Session,
}

/// Self-service account registration payload.
///
/// Registration never yields a session; the backend requires an explicit
/// login afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Remote authentication service contract.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a grant.
    async fn login(&self, email: &str, password: &str) -> AuthResult<AuthGrant>;

    /// Creates a new patient account.
    async fn register(&self, request: &RegisterRequest) -> AuthResult<()>;

    /// Re-validates a persisted token, returning a fresh grant.
    ///
    /// Expired tokens yield `AuthError::TokenExpired`; malformed ones
    /// `AuthError::TokenInvalid`.
    async fn restore(&self, token: &str) -> AuthResult<AuthGrant>;
}

/// Durable token slot owned by the shell (browser local storage or the
/// platform keychain).
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

#[cfg(test)]
mod tests {
    use super::AuthError;

    #[test]
    fn error_text_is_suitable_for_inline_form_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
        assert!(AuthError::Network("timeout".to_string())
            .to_string()
            .contains("timeout"));
        assert!(AuthError::Server {
            message: "account disabled".to_string()
        }
        .to_string()
        .contains("account disabled"));
    }
}
