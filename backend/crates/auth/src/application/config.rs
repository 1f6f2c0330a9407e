//! Application Configuration
//!
//! Configuration for the Auth application layer.

pub use platform::password::PasswordScheme;

/// Durable storage key of the admin credential record
pub const ADMIN_CREDENTIALS_KEY: &str = "admin_credentials";

/// Session storage key of the authentication marker
pub const ADMIN_SESSION_KEY: &str = "admin_auth";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Durable key holding the credential JSON
    pub credentials_key: String,
    /// Session key holding the `"true"` marker
    pub session_key: String,
    /// Scheme used when hashing a new password
    pub password_scheme: PasswordScheme,
    /// Setup form: minimum admin ID length (characters)
    pub min_username_length: usize,
    /// Setup form: minimum password length (characters)
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials_key: ADMIN_CREDENTIALS_KEY.to_string(),
            session_key: ADMIN_SESSION_KEY.to_string(),
            password_scheme: PasswordScheme::Sha256Hex,
            min_username_length: 3,
            min_password_length: 6,
        }
    }
}

impl AuthConfig {
    /// Config that hashes new passwords with Argon2id
    ///
    /// Records written under the default scheme still verify.
    pub fn hardened() -> Self {
        Self {
            password_scheme: PasswordScheme::Argon2id,
            ..Default::default()
        }
    }

    pub fn with_password_scheme(mut self, scheme: PasswordScheme) -> Self {
        self.password_scheme = scheme;
        self
    }
}
