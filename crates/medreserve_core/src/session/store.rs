//! Session store: the single writer of authentication state.

use crate::model::role::Role;
use crate::model::session::{AuthState, Session};
use crate::session::auth_spi::{
    AuthError, AuthGateway, AuthResult, RegisterRequest, TokenStore,
};
use log::{info, warn};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Single source of truth for "who is logged in and with what role".
///
/// Consumers must read the current snapshot at decision time rather than a
/// value captured earlier; a logout between two renders is then observed by
/// the next guard evaluation.
pub struct SessionStore {
    gateway: Arc<dyn AuthGateway>,
    tokens: Arc<dyn TokenStore>,
    state: RwLock<AuthState>,
}

impl SessionStore {
    pub fn new(gateway: Arc<dyn AuthGateway>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            gateway,
            tokens,
            state: RwLock::new(AuthState::Uninitialized),
        }
    }

    /// Resolves the startup state from any persisted token.
    ///
    /// # Contract
    /// - Transitions `Uninitialized -> Loading`, then to `Authenticated`
    ///   when the token re-validates, `Anonymous` otherwise.
    /// - Expired or invalid persisted tokens are cleared; transient network
    ///   failures keep the token for the next full restart.
    /// - A second call after resolution is a no-op.
    pub async fn initialize(&self) {
        {
            let mut state = self.write_state();
            if !matches!(*state, AuthState::Uninitialized) {
                return;
            }
            *state = AuthState::Loading;
        }

        let Some(token) = self.tokens.load() else {
            info!("event=session_restore module=session status=none");
            *self.write_state() = AuthState::Anonymous;
            return;
        };

        match self.gateway.restore(&token).await {
            Ok(grant) => {
                info!(
                    "event=session_restore module=session status=ok role={} user_id={}",
                    grant.session.role, grant.session.user_id
                );
                self.tokens.save(&grant.token);
                *self.write_state() = AuthState::Authenticated(grant.session);
            }
            Err(err @ (AuthError::TokenExpired | AuthError::TokenInvalid)) => {
                info!("event=session_restore module=session status=stale reason={err}");
                self.tokens.clear();
                *self.write_state() = AuthState::Anonymous;
            }
            Err(err) => {
                warn!("event=session_restore module=session status=error error={err}");
                *self.write_state() = AuthState::Anonymous;
            }
        }
    }

    /// Exchanges credentials for an authenticated session.
    ///
    /// # Contract
    /// - On success: persists the token, replaces state atomically and
    ///   returns the role so the caller can drive its own redirect.
    /// - On failure: returns the typed error and leaves state untouched.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Role> {
        let grant = match self.gateway.login(email, password).await {
            Ok(grant) => grant,
            Err(err) => {
                warn!("event=login module=session status=error error={err}");
                return Err(err);
            }
        };

        let role = grant.session.role;
        info!(
            "event=login module=session status=ok role={role} user_id={}",
            grant.session.user_id
        );
        self.tokens.save(&grant.token);
        *self.write_state() = AuthState::Authenticated(grant.session);
        Ok(role)
    }

    /// Creates a new account; never mutates session state.
    pub async fn register(&self, request: &RegisterRequest) -> AuthResult<()> {
        self.gateway.register(request).await
    }

    /// Clears the session synchronously.
    ///
    /// Any holder of a previously cloned snapshot must treat it as invalid;
    /// the next `auth_state()` read observes `Anonymous`.
    pub fn logout(&self) {
        self.tokens.clear();
        *self.write_state() = AuthState::Anonymous;
        info!("event=logout module=session status=ok");
    }

    /// True iff authenticated with exactly this role. Never errors when
    /// unauthenticated.
    pub fn has_role(&self, role: Role) -> bool {
        self.read_state()
            .session()
            .is_some_and(|session| session.role == role)
    }

    /// Current identity snapshot, if authenticated.
    pub fn current_user(&self) -> Option<Session> {
        self.read_state().session().cloned()
    }

    /// Current lifecycle state snapshot.
    pub fn auth_state(&self) -> AuthState {
        self.read_state().clone()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::SessionStore;
    use crate::model::role::Role;
    use crate::model::session::{AuthState, Session};
    use crate::session::auth_spi::{
        AuthError, AuthGateway, AuthGrant, AuthResult, RegisterRequest, TokenStore,
    };
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    struct StaticGateway {
        login_result: AuthResult<AuthGrant>,
        restore_result: AuthResult<AuthGrant>,
    }

    #[async_trait]
    impl AuthGateway for StaticGateway {
        async fn login(&self, _email: &str, _password: &str) -> AuthResult<AuthGrant> {
            self.login_result.clone()
        }

        async fn register(&self, _request: &RegisterRequest) -> AuthResult<()> {
            Ok(())
        }

        async fn restore(&self, _token: &str) -> AuthResult<AuthGrant> {
            self.restore_result.clone()
        }
    }

    #[derive(Default)]
    struct MemoryTokenStore {
        token: Mutex<Option<String>>,
    }

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.token.lock().expect("token lock").clone()
        }

        fn save(&self, token: &str) {
            *self.token.lock().expect("token lock") = Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.lock().expect("token lock") = None;
        }
    }

    fn grant_for(role: Role) -> AuthGrant {
        AuthGrant {
            token: "token-1".to_string(),
            session: Session::new(Uuid::new_v4(), "a@example.com", "A Example", role),
        }
    }

    fn store_with(
        login_result: AuthResult<AuthGrant>,
        restore_result: AuthResult<AuthGrant>,
        tokens: Arc<MemoryTokenStore>,
    ) -> SessionStore {
        SessionStore::new(
            Arc::new(StaticGateway {
                login_result,
                restore_result,
            }),
            tokens,
        )
    }

    #[tokio::test]
    async fn login_success_persists_token_and_returns_role() {
        let tokens = Arc::new(MemoryTokenStore::default());
        let store = store_with(
            Ok(grant_for(Role::Doctor)),
            Err(AuthError::TokenInvalid),
            tokens.clone(),
        );

        let role = store.login("a@example.com", "pw").await.expect("login");
        assert_eq!(role, Role::Doctor);
        assert!(store.has_role(Role::Doctor));
        assert!(!store.has_role(Role::Admin));
        assert_eq!(tokens.load().as_deref(), Some("token-1"));
    }

    #[tokio::test]
    async fn login_failure_leaves_state_untouched() {
        let tokens = Arc::new(MemoryTokenStore::default());
        let store = store_with(
            Err(AuthError::InvalidCredentials),
            Err(AuthError::TokenInvalid),
            tokens.clone(),
        );
        store.initialize().await;

        let err = store.login("a@example.com", "bad").await.expect_err("login must fail");
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(store.auth_state(), AuthState::Anonymous);
        assert!(tokens.load().is_none());
    }

    #[tokio::test]
    async fn initialize_without_token_resolves_anonymous() {
        let store = store_with(
            Err(AuthError::InvalidCredentials),
            Err(AuthError::TokenInvalid),
            Arc::new(MemoryTokenStore::default()),
        );
        assert_eq!(store.auth_state(), AuthState::Uninitialized);

        store.initialize().await;
        assert_eq!(store.auth_state(), AuthState::Anonymous);
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn initialize_restores_a_valid_token() {
        let tokens = Arc::new(MemoryTokenStore::default());
        tokens.save("persisted");
        let store = store_with(
            Err(AuthError::InvalidCredentials),
            Ok(grant_for(Role::User)),
            tokens,
        );

        store.initialize().await;
        assert!(store.auth_state().is_authenticated());
        assert_eq!(store.current_user().map(|s| s.role), Some(Role::User));
    }

    #[tokio::test]
    async fn initialize_clears_expired_token() {
        let tokens = Arc::new(MemoryTokenStore::default());
        tokens.save("stale");
        let store = store_with(
            Err(AuthError::InvalidCredentials),
            Err(AuthError::TokenExpired),
            tokens.clone(),
        );

        store.initialize().await;
        assert_eq!(store.auth_state(), AuthState::Anonymous);
        assert!(tokens.load().is_none());
    }

    #[tokio::test]
    async fn initialize_keeps_token_on_transient_network_failure() {
        let tokens = Arc::new(MemoryTokenStore::default());
        tokens.save("maybe-good");
        let store = store_with(
            Err(AuthError::InvalidCredentials),
            Err(AuthError::Network("offline".to_string())),
            tokens.clone(),
        );

        store.initialize().await;
        assert_eq!(store.auth_state(), AuthState::Anonymous);
        assert_eq!(tokens.load().as_deref(), Some("maybe-good"));
    }

    #[tokio::test]
    async fn logout_is_synchronous_and_clears_token() {
        let tokens = Arc::new(MemoryTokenStore::default());
        let store = store_with(
            Ok(grant_for(Role::Admin)),
            Err(AuthError::TokenInvalid),
            tokens.clone(),
        );
        store.login("a@example.com", "pw").await.expect("login");

        store.logout();
        assert_eq!(store.auth_state(), AuthState::Anonymous);
        assert!(store.current_user().is_none());
        assert!(tokens.load().is_none());
    }

    #[tokio::test]
    async fn initialize_is_a_noop_once_resolved() {
        let store = store_with(
            Err(AuthError::InvalidCredentials),
            Err(AuthError::TokenInvalid),
            Arc::new(MemoryTokenStore::default()),
        );
        store.initialize().await;
        store.initialize().await;
        assert_eq!(store.auth_state(), AuthState::Anonymous);
    }
}
