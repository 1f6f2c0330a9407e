//! Application Layer
//!
//! Use cases and the credential store facade.

pub mod config;
pub mod credential_store;
pub mod restore_session;
pub mod setup;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use config::AuthConfig;
pub use credential_store::CredentialStore;
pub use restore_session::RestoreSessionUseCase;
pub use setup::{SetupForm, SetupFormError, SetupInput, SetupUseCase};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
