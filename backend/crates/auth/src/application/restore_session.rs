//! Restore Session Use Case
//!
//! Runs once at start-up. A session marker only counts while a credential
//! exists; an orphaned marker is removed.

use std::sync::Arc;

use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::AuthResult;

/// Restore session use case
pub struct RestoreSessionUseCase<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
}

impl<C, S> RestoreSessionUseCase<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(credential_repo: Arc<C>, session_repo: Arc<S>) -> Self {
        Self {
            credential_repo,
            session_repo,
        }
    }

    /// `Ok(true)` when a marker exists and the credential is still present
    pub async fn execute(&self) -> AuthResult<bool> {
        if !self.session_repo.get().await? {
            return Ok(false);
        }

        if self.credential_repo.exists().await? {
            tracing::debug!("Admin session restored");
            return Ok(true);
        }

        self.session_repo.clear().await?;
        tracing::info!("Discarded admin session without stored credentials");
        Ok(false)
    }
}
