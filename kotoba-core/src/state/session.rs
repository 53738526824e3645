use std::cell::RefCell;
use std::rc::Rc;

use crate::auth::AuthService;
use crate::error::{AuthError, StorageError};
use crate::models::{Credentials, UserIdentity};

/// Where the current identity survives a page reload.
pub trait SessionStore {
    fn load(&self) -> Result<Option<UserIdentity>, StorageError>;
    fn save(&self, identity: &UserIdentity) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Keeps the identity for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    identity: RefCell<Option<UserIdentity>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: UserIdentity) -> Self {
        Self {
            identity: RefCell::new(Some(identity)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<UserIdentity>, StorageError> {
        Ok(self.identity.borrow().clone())
    }

    fn save(&self, identity: &UserIdentity) -> Result<(), StorageError> {
        *self.identity.borrow_mut() = Some(identity.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.identity.borrow_mut().take();
        Ok(())
    }
}

/// The current authenticated user, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<UserIdentity>,
}

/// Owns the session and is the only thing that writes it.
///
/// Built once at start with the auth service and store it should use, so
/// tests can swap either. No borrow of the session is held across an await.
pub struct SessionContext {
    auth: Rc<dyn AuthService>,
    store: Rc<dyn SessionStore>,
    session: RefCell<Session>,
}

impl SessionContext {
    pub fn new(auth: Rc<dyn AuthService>, store: Rc<dyn SessionStore>) -> Self {
        Self {
            auth,
            store,
            session: RefCell::new(Session::default()),
        }
    }

    pub fn current(&self) -> Option<UserIdentity> {
        self.session.borrow().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().identity.is_some()
    }

    /// Rehydrate from the store, dropping an identity the service has expired.
    pub async fn restore(&self) -> Option<UserIdentity> {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Failed to load stored session: {}", e);
                self.clear_store();
                None
            }
        };

        let Some(identity) = stored else {
            return None;
        };

        match self.auth.verify(&identity).await {
            Ok(()) => {}
            Err(AuthError::SessionExpired) => {
                tracing::info!("Stored session for {} has expired", identity.email);
                self.invalidate();
                return None;
            }
            Err(e) => {
                // Keep the session when the service cannot be reached
                tracing::warn!("Could not verify stored session: {}", e);
            }
        }

        self.session.borrow_mut().identity = Some(identity.clone());
        Some(identity)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        tracing::debug!("Logging in {}", credentials.email);
        let identity = self.auth.login(credentials).await.map_err(|e| {
            tracing::warn!("Login failed for {}: {}", credentials.email, e);
            e
        })?;

        if let Err(e) = self.store.save(&identity) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        self.session.borrow_mut().identity = Some(identity.clone());
        tracing::info!("Signed in as {}", identity.display_name);
        Ok(identity)
    }

    /// Sign out. Local state is cleared even when the service call fails.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let Some(identity) = self.current() else {
            return Ok(());
        };

        let result = self.auth.logout(&identity).await;
        if let Err(e) = &result {
            tracing::warn!("Auth service logout failed: {}", e);
        }
        self.invalidate();
        tracing::info!("Signed out {}", identity.display_name);
        result
    }

    /// Drop the session, e.g. when the service reports the token invalid.
    pub fn invalidate(&self) {
        self.session.borrow_mut().identity = None;
        self.clear_store();
    }

    fn clear_store(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthService;

    fn context(auth: MockAuthService, store: Rc<MemorySessionStore>) -> SessionContext {
        SessionContext::new(Rc::new(auth), store)
    }

    #[tokio::test]
    async fn test_login_persists_identity() {
        let store = Rc::new(MemorySessionStore::new());
        let ctx = context(MockAuthService::accepting_all(), Rc::clone(&store));
        assert!(!ctx.is_authenticated());

        let identity = ctx
            .login(&Credentials::new("yuki@example.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(ctx.current(), Some(identity.clone()));
        assert_eq!(store.load().unwrap(), Some(identity));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_alone() {
        let store = Rc::new(MemorySessionStore::new());
        let ctx = context(MockAuthService::failing(AuthError::InvalidCredentials), store);
        let err = ctx
            .login(&Credentials::new("yuki@example.com", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(ctx.current().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_service_fails() {
        let identity = MockAuthService::accepting_all()
            .login(&Credentials::new("a@b.co", "secret1"))
            .await
            .unwrap();
        let store = Rc::new(MemorySessionStore::with_identity(identity));
        let ctx = context(MockAuthService::failing(AuthError::Network("down".into())), Rc::clone(&store));
        // verify fails with a network error, so the identity is kept
        assert!(ctx.restore().await.is_some());

        let result = ctx.logout().await;
        assert!(matches!(result, Err(AuthError::Network(_))));
        assert!(ctx.current().is_none());
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_without_session_is_noop() {
        let ctx = context(MockAuthService::accepting_all(), Rc::new(MemorySessionStore::new()));
        assert!(ctx.logout().await.is_ok());
    }

    #[tokio::test]
    async fn test_restore_drops_expired_identity() {
        let stale = UserIdentity {
            display_name: "Old".to_string(),
            email: "old@example.com".to_string(),
            avatar_url: None,
            token: "not-a-token".to_string(),
        };
        let store = Rc::new(MemorySessionStore::with_identity(stale));
        let ctx = context(MockAuthService::accepting_all(), Rc::clone(&store));
        assert!(ctx.restore().await.is_none());
        assert!(ctx.current().is_none());
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_keeps_valid_identity() {
        let auth = MockAuthService::accepting_all();
        let identity = auth
            .login(&Credentials::new("a@b.co", "secret1"))
            .await
            .unwrap();
        let store = Rc::new(MemorySessionStore::with_identity(identity.clone()));
        let ctx = context(auth, store);
        assert_eq!(ctx.restore().await, Some(identity));
        assert!(ctx.is_authenticated());
    }
}
