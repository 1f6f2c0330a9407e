//! Admin Authentication Module
//!
//! Clean Architecture structure:
//! - `domain/` - Admin credential entity, repository traits
//! - `application/` - Use cases and the credential store facade
//! - `infra/` - Key-value storage implementations
//!
//! ## Features
//! - Single administrator account created at first run
//! - Login against the stored credential, logout
//! - Session marker restored at start-up while the credential exists
//!
//! ## Security Model
//! - Only a password digest is stored (SHA-256 hex by default, Argon2id
//!   when configured); verification follows the stored format
//! - Digests compared in constant time
//! - Every fault reads as "not authenticated"

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::credential_store::CredentialStore;
pub use application::setup::{SetupForm, SetupFormError};
pub use error::{AuthError, AuthResult};
pub use infra::kv::{KvCredentialRepository, KvSessionRepository};

pub use kernel::error::ErrorKind;

/// Credential store over key-value storage
pub type KvCredentialStore<D, S> = CredentialStore<KvCredentialRepository<D>, KvSessionRepository<S>>;
