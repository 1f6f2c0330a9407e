//! Repository Traits
//!
//! Interfaces for persistence. Implementations live in the infrastructure
//! layer; tests plug in in-memory stores.

use crate::domain::entity::AdminCredential;
use crate::error::AuthResult;

/// Durable admin credential repository
///
/// Holds at most one record.
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Whether a credential record is present (without decoding it)
    async fn exists(&self) -> AuthResult<bool>;

    /// Load and decode the credential record
    async fn find(&self) -> AuthResult<Option<AdminCredential>>;

    /// Store the credential, replacing any previous record
    async fn save(&self, credential: &AdminCredential) -> AuthResult<()>;
}

/// Session-scoped authentication marker
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Whether the marker is set
    async fn get(&self) -> AuthResult<bool>;

    /// Set the marker
    async fn set(&self) -> AuthResult<()>;

    /// Remove the marker
    async fn clear(&self) -> AuthResult<()>;
}
