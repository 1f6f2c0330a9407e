//! Admin Credential Entity
//!
//! The single administrator identity. Its presence in durable storage is
//! also the "setup complete" flag.

use platform::password::{ClearTextPassword, PasswordDigest};

/// Admin credential entity
///
/// Holds the username exactly as typed at setup and the password digest.
/// The clear-text password is never part of this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential {
    /// Admin ID chosen at setup (case-sensitive)
    pub username: String,
    /// Digest of the admin password
    pub password_hash: PasswordDigest,
}

impl AdminCredential {
    pub fn new(username: impl Into<String>, password_hash: PasswordDigest) -> Self {
        Self {
            username: username.into(),
            password_hash,
        }
    }

    /// Exact username match plus digest match
    ///
    /// Both sides are always evaluated so a wrong username costs the same as
    /// a wrong password.
    pub fn matches(&self, username: &str, password: &ClearTextPassword) -> bool {
        let username_ok = self.username == username;
        let password_ok = self.password_hash.verify(password);
        username_ok && password_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::PasswordScheme;

    fn credential(username: &str, password: &str) -> AdminCredential {
        let digest = ClearTextPassword::new(password)
            .hash(PasswordScheme::Sha256Hex)
            .unwrap();
        AdminCredential::new(username, digest)
    }

    #[test]
    fn test_matches() {
        let cred = credential("Admin", "secret1");
        assert!(cred.matches("Admin", &ClearTextPassword::new("secret1")));
    }

    #[test]
    fn test_username_is_case_sensitive() {
        let cred = credential("Admin", "secret1");
        assert!(!cred.matches("admin", &ClearTextPassword::new("secret1")));
        assert!(!cred.matches("Admin ", &ClearTextPassword::new("secret1")));
    }

    #[test]
    fn test_wrong_password() {
        let cred = credential("Admin", "secret1");
        assert!(!cred.matches("Admin", &ClearTextPassword::new("secret1x")));
        assert!(!cred.matches("Admin", &ClearTextPassword::new("Secret1")));
    }
}
