//! Sign Out Use Case
//!
//! Removes the session marker.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self) -> AuthResult<()> {
        self.session_repo.clear().await?;
        tracing::info!("Admin signed out");
        Ok(())
    }
}
