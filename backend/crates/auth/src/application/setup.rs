//! Setup Use Case
//!
//! First-run creation of the admin credential, plus the form checks the
//! setup screen applies before calling it.

use std::fmt;
use std::sync::Arc;

use kernel::BilingualText;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::AdminCredential;
use crate::domain::repository::CredentialRepository;
use crate::error::{AuthError, AuthResult};

/// Setup input
pub struct SetupInput {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Setup form (caller-side checks)
// ============================================================================

/// Setup form as typed by the operator
pub struct SetupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Setup form rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupFormError {
    /// Password and confirmation differ
    PasswordMismatch,
    /// Password shorter than the configured minimum
    PasswordTooShort { min: usize },
    /// Admin ID shorter than the configured minimum
    UsernameTooShort { min: usize },
}

impl SetupFormError {
    /// Message in both site languages
    pub fn message(&self) -> BilingualText {
        match self {
            Self::PasswordMismatch => {
                BilingualText::new("Passwords do not match", "पासवर्ड मेल नहीं खाते")
            }
            Self::PasswordTooShort { min } => BilingualText::new(
                format!("Password must be at least {min} characters"),
                format!("पासवर्ड कम से कम {min} अक्षर का होना चाहिए"),
            ),
            Self::UsernameTooShort { min } => BilingualText::new(
                format!("Username must be at least {min} characters"),
                format!("उपयोगकर्ता नाम कम से कम {min} अक्षर का होना चाहिए"),
            ),
        }
    }
}

impl fmt::Display for SetupFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message().english)
    }
}

impl std::error::Error for SetupFormError {}

impl SetupForm {
    /// Apply the setup screen checks in order: confirmation, password
    /// length, admin ID length.
    pub fn validate(&self, config: &AuthConfig) -> Result<(), SetupFormError> {
        if self.password != self.confirm_password {
            return Err(SetupFormError::PasswordMismatch);
        }

        if self.password.chars().count() < config.min_password_length {
            return Err(SetupFormError::PasswordTooShort {
                min: config.min_password_length,
            });
        }

        if self.username.chars().count() < config.min_username_length {
            return Err(SetupFormError::UsernameTooShort {
                min: config.min_username_length,
            });
        }

        Ok(())
    }

    pub fn into_input(self) -> SetupInput {
        SetupInput {
            username: self.username,
            password: self.password,
        }
    }
}

// ============================================================================
// Use case
// ============================================================================

/// Setup use case
pub struct SetupUseCase<C>
where
    C: CredentialRepository,
{
    credential_repo: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> SetupUseCase<C>
where
    C: CredentialRepository,
{
    pub fn new(credential_repo: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            credential_repo,
            config,
        }
    }

    /// Whether setup has already happened
    pub async fn has_credentials(&self) -> AuthResult<bool> {
        self.credential_repo.exists().await
    }

    /// Hash the password and store the credential, overwriting any
    /// previous record. No validation happens here.
    pub async fn execute(&self, input: SetupInput) -> AuthResult<()> {
        let password = ClearTextPassword::new(input.password);
        let password_hash = password
            .hash(self.config.password_scheme)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let credential = AdminCredential::new(input.username, password_hash);
        self.credential_repo.save(&credential).await?;

        tracing::info!(
            username = %credential.username,
            scheme = %self.config.password_scheme,
            "Admin credentials created"
        );

        Ok(())
    }
}
