// --- File: crates/formarte_auth/src/lib.rs ---
//! Account pages of the FormArte portal.
//!
//! Accounts live under `storage.users_key` in the shared key-value store,
//! separate from the booking identity. Passwords are kept as SHA-256 digests.

pub mod directory;
#[cfg(test)]
mod directory_test;
pub mod doc;
pub mod error;
pub mod forgot;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod service;
pub mod validation;
#[cfg(test)]
mod validation_test;

pub use directory::AccountDirectory;
pub use error::AuthError;
pub use handlers::AuthState;
pub use models::{PublicUser, ResetStep};
pub use routes::{router, routes};
pub use service::AuthService;
