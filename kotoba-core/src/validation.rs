//! Client-side schemas for the Login and SignUp forms.
//!
//! Validation is a pure function from field values to a map of field errors,
//! so it runs without any rendering.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::models::{Credentials, Role};

/// Minimum password length for both forms
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum display name length on sign up
pub const MIN_NAME_LEN: usize = 2;

/// Local part is any run of RFC 5322 atext and dots. The domain needs at
/// least one dot, so single-label hosts such as `localhost` are refused.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~\-]+",
        r"@[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?)+$",
    ))
    .expect("Invalid email regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Role,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Field name to error. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Inline message for a field, if it is invalid.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    fn record(&mut self, field: Field, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.insert(field, error);
        }
    }
}

/// A form whose values can be checked and turned into credentials.
pub trait FormSchema {
    fn validate(&self) -> FieldErrors;

    /// Credentials to hand the auth service once `validate` is clean
    fn credentials(&self) -> Credentials;

    /// Banner shown when the auth service rejects the submission
    fn failure_message(&self) -> &'static str;
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Required { label: "Email" });
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required { label: "Password" });
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            label: "Password",
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Required { label: "Name" });
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort {
            label: "Name",
            min: MIN_NAME_LEN,
        });
    }
    Ok(())
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if confirmation.is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }
    if confirmation != password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_role(role: &str) -> Result<Role, ValidationError> {
    if role.is_empty() {
        return Err(ValidationError::Required { label: "Role" });
    }
    role.parse().map_err(|()| ValidationError::InvalidRole)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl FormSchema for LoginFields {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.record(Field::Email, validate_email(&self.email));
        errors.record(Field::Password, validate_password(&self.password));
        errors
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(&self.email, &self.password)
    }

    fn failure_message(&self) -> &'static str {
        "Failed to login. Please check your credentials."
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpFields {
    pub name: String,
    pub email: String,
    /// Raw select value; must parse as a `Role`
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for SignUpFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::default().as_str().to_string(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl FormSchema for SignUpFields {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.record(Field::Name, validate_name(&self.name));
        errors.record(Field::Email, validate_email(&self.email));
        errors.record(Field::Role, validate_role(&self.role).map(|_| ()));
        errors.record(Field::Password, validate_password(&self.password));
        errors.record(
            Field::ConfirmPassword,
            validate_confirmation(&self.password, &self.confirm_password),
        );
        errors
    }

    // Sign up has no endpoint of its own yet; a new account signs straight in.
    fn credentials(&self) -> Credentials {
        Credentials::new(&self.email, &self.password)
    }

    fn failure_message(&self) -> &'static str {
        "Failed to create account. Please try again."
    }
}
