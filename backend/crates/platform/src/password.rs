//! Password Hashing and Verification
//!
//! Two digest schemes are supported:
//! - `Sha256Hex`: a single unsalted SHA-256 pass rendered as 64 lower-case hex
//!   characters. This is the stored format of existing admin records.
//! - `Argon2id`: salted, memory-hard hash in PHC string format.
//!
//! Verification looks at the stored digest to decide which scheme produced
//! it, so changing the configured scheme never locks out an existing record.
//!
//! ## Security Notes
//! - `Sha256Hex` only deters casual inspection of the storage. It offers no
//!   protection against offline brute force by someone who can read it.
//! - Both schemes compare digests in constant time.
//! - Clear text is zeroized on drop.

use std::fmt;
use std::str::FromStr;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, is_sha256_hex, sha256_hex};

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored digest matches neither supported format
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// Scheme name not recognised
    #[error("Unknown password scheme '{0}', expected 'sha256' or 'argon2id'")]
    UnknownScheme(String),
}

// ============================================================================
// Scheme
// ============================================================================

/// Digest scheme used when hashing a new password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    /// Unsalted SHA-256, lower-case hex
    #[default]
    Sha256Hex,
    /// Argon2id with a random salt (OWASP default parameters)
    Argon2id,
}

impl PasswordScheme {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PasswordScheme::Sha256Hex => "sha256",
            PasswordScheme::Argon2id => "argon2id",
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PasswordScheme {
    type Err = PasswordHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(PasswordScheme::Sha256Hex),
            "argon2id" | "argon2" => Ok(PasswordScheme::Argon2id),
            other => Err(PasswordHashError::UnknownScheme(other.to_string())),
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// No policy is applied here: length and confirmation rules belong to the
/// caller. The bytes hashed are the UTF-8 encoding of the string as given.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password with the given scheme
    pub fn hash(&self, scheme: PasswordScheme) -> Result<PasswordDigest, PasswordHashError> {
        match scheme {
            PasswordScheme::Sha256Hex => Ok(PasswordDigest {
                value: sha256_hex(self.as_bytes()),
                scheme,
            }),
            PasswordScheme::Argon2id => {
                // Generate random salt (128 bits = 16 bytes)
                let salt = SaltString::generate(OsRng);

                // OWASP recommended Argon2id parameters:
                // m=19456 (19 MiB), t=2, p=1
                let hash = Argon2::default()
                    .hash_password(self.as_bytes(), &salt)
                    .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

                Ok(PasswordDigest {
                    value: hash.to_string(),
                    scheme,
                })
            }
        }
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Digest (Safe to store)
// ============================================================================

/// Stored password digest
///
/// Either 64 lower-case hex characters (`Sha256Hex`) or an Argon2id PHC
/// string.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    value: String,
    scheme: PasswordScheme,
}

impl PasswordDigest {
    /// Parse a digest read back from storage
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let value = s.into();

        if is_sha256_hex(&value) {
            return Ok(Self {
                value,
                scheme: PasswordScheme::Sha256Hex,
            });
        }

        let parsed = PasswordHash::new(&value).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        if parsed.algorithm != argon2::Algorithm::Argon2id.ident() {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self {
            value,
            scheme: PasswordScheme::Argon2id,
        })
    }

    /// The string written to storage
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Scheme that produced this digest
    pub fn scheme(&self) -> PasswordScheme {
        self.scheme
    }

    /// Verify a password against this digest
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        match self.scheme {
            PasswordScheme::Sha256Hex => {
                let candidate = sha256_hex(password.as_bytes());
                constant_time_eq(candidate.as_bytes(), self.value.as_bytes())
            }
            PasswordScheme::Argon2id => {
                let parsed_hash = match PasswordHash::new(&self.value) {
                    Ok(h) => h,
                    Err(_) => return false,
                };

                // Argon2 uses constant-time comparison internally
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed_hash)
                    .is_ok()
            }
        }
    }

    /// Whether a digest should be replaced after a successful verification
    /// under `scheme`. Only upgrades: an Argon2id digest is kept when the
    /// configured scheme is `Sha256Hex`.
    pub fn needs_rehash(&self, scheme: PasswordScheme) -> bool {
        self.scheme == PasswordScheme::Sha256Hex && scheme == PasswordScheme::Argon2id
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("scheme", &self.scheme)
            .field("value", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
