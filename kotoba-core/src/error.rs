use thiserror::Error;

/// Failures reported by the external authentication service.
///
/// The text of these errors is for logs only. Forms show their own generic
/// banner instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("network failure: {0}")]
    Network(String),
    #[error("session expired")]
    SessionExpired,
    #[error("authentication service unavailable")]
    Unavailable,
}

/// A field-level validation failure. `Display` is the inline message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: &'static str },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },
    #[error("Please confirm your password")]
    ConfirmationRequired,
    #[error("Passwords must match")]
    PasswordMismatch,
    #[error("Please select a valid role")]
    InvalidRole,
}

/// Session persistence failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("failed to access session storage: {0}")]
    Access(String),
    #[error("stored session is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog id {0}")]
    DuplicateId(u32),
}
