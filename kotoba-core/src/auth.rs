use std::cell::Cell;
use std::collections::HashMap;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::AuthError;
use crate::models::{Credentials, UserIdentity};

/// The external authentication service.
///
/// The UI knows nothing about its transport or storage. Futures are not
/// `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError>;

    async fn logout(&self, identity: &UserIdentity) -> Result<(), AuthError>;

    /// Check that a persisted identity is still valid.
    async fn verify(&self, _identity: &UserIdentity) -> Result<(), AuthError> {
        Ok(())
    }
}

/// In-process stand-in for the real authentication service.
#[derive(Debug, Default)]
pub struct MockAuthService {
    /// When set, only these email/password pairs are accepted
    accounts: Option<HashMap<String, String>>,
    /// When set, every call fails with this error
    failure: Option<AuthError>,
    issued: Cell<u64>,
}

impl MockAuthService {
    /// Accept any credentials.
    pub fn accepting_all() -> Self {
        Self::default()
    }

    pub fn with_accounts<I, E, P>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
        E: Into<String>,
        P: Into<String>,
    {
        Self {
            accounts: Some(
                accounts
                    .into_iter()
                    .map(|(email, password)| (email.into(), password.into()))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    /// Fail every call with `error`.
    pub fn failing(error: AuthError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    fn check_available(&self) -> Result<(), AuthError> {
        self.failure.clone().map_or(Ok(()), Err)
    }

    fn issue_token(&self, email: &str) -> String {
        let sequence = self.issued.get() + 1;
        self.issued.set(sequence);
        let mut hasher = Sha256::new();
        hasher.update(email.as_bytes());
        hasher.update(sequence.to_be_bytes());
        hex::encode(hasher.finalize())
    }

    /// Number of tokens handed out so far
    pub fn issued(&self) -> u64 {
        self.issued.get()
    }
}

#[async_trait(?Send)]
impl AuthService for MockAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, AuthError> {
        self.check_available()?;
        if let Some(accounts) = &self.accounts {
            if accounts.get(&credentials.email) != Some(&credentials.password) {
                return Err(AuthError::InvalidCredentials);
            }
        }
        Ok(UserIdentity {
            display_name: display_name_from_email(&credentials.email),
            email: credentials.email.clone(),
            avatar_url: None,
            token: self.issue_token(&credentials.email),
        })
    }

    async fn logout(&self, _identity: &UserIdentity) -> Result<(), AuthError> {
        self.check_available()
    }

    async fn verify(&self, identity: &UserIdentity) -> Result<(), AuthError> {
        self.check_available()?;
        let well_formed =
            identity.token.len() == 64 && identity.token.chars().all(|c| c.is_ascii_hexdigit());
        if well_formed {
            Ok(())
        } else {
            Err(AuthError::SessionExpired)
        }
    }
}

/// "yuki.tanaka@example.com" becomes "Yuki Tanaka".
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let name = local
        .split(['.', '_', '-', '+'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        "Student".to_string()
    } else {
        name
    }
}
