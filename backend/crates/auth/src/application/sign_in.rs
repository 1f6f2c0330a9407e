//! Sign In Use Case
//!
//! Checks the supplied admin ID and password against the stored credential
//! and sets the session marker on success. A record hashed under another
//! scheme than the configured one is re-hashed with the verified password.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::AdminCredential;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<C, S> SignInUseCase<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(credential_repo: Arc<C>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            credential_repo,
            session_repo,
            config,
        }
    }

    /// `Ok(true)` when the admin is now signed in, `Ok(false)` for no
    /// credential or a mismatch. Storage and decoding faults are `Err`.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<bool> {
        let Some(credential) = self.credential_repo.find().await? else {
            tracing::debug!("Sign in attempted before admin setup");
            return Ok(false);
        };

        let password = ClearTextPassword::new(input.password);
        if !credential.matches(&input.username, &password) {
            tracing::warn!("Invalid admin login attempt");
            return Ok(false);
        }

        if credential.password_hash.needs_rehash(self.config.password_scheme) {
            if let Err(e) = self.rehash(&credential, &password).await {
                // Login stands; the old record still verifies
                e.log("rehash");
            }
        }

        self.session_repo.set().await?;

        tracing::info!(username = %credential.username, "Admin signed in");
        Ok(true)
    }

    /// Store the credential again under the configured scheme
    async fn rehash(
        &self,
        credential: &AdminCredential,
        password: &ClearTextPassword,
    ) -> AuthResult<()> {
        let password_hash = password
            .hash(self.config.password_scheme)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let upgraded = AdminCredential::new(credential.username.clone(), password_hash);
        self.credential_repo.save(&upgraded).await?;

        tracing::info!(
            from = %credential.password_hash.scheme(),
            to = %self.config.password_scheme,
            "Admin credential re-hashed"
        );
        Ok(())
    }
}
