//! Browser-side adapters for the core collaborator traits.

pub mod auth;
pub mod storage;

pub use auth::TimedAuth;
