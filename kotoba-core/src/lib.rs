//! Framework-free domain logic for the Kotoba frontend: static catalogs and
//! their filter, form schemas and the submission state machine, the session
//! context and the authentication service it talks to.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;

pub use auth::{AuthService, MockAuthService};
pub use config::{AppConfig, Theme};
pub use error::{AuthError, CatalogError, ConfigError, StorageError, ValidationError};
pub use routes::AppRoute;
