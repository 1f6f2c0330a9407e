//! Auth Error Types
//!
//! Auth-specific error variants. Each maps onto the shared
//! `kernel::error::ErrorKind` so callers can classify it without matching
//! on this enum.

use kernel::error::ErrorKind;
use platform::storage::StorageError;
use thiserror::Error;

use crate::application::setup::SetupFormError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Durable or session storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The stored admin record cannot be decoded
    #[error("Stored admin credential is corrupted: {0}")]
    CorruptedCredential(String),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Setup form rejected before reaching the store
    #[error("Setup rejected: {0}")]
    InvalidSetup(#[from] SetupFormError),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Storage(StorageError::Corrupted(_)) => ErrorKind::CorruptedData,
            AuthError::Storage(_) => ErrorKind::StorageUnavailable,
            AuthError::CorruptedCredential(_) => ErrorKind::CorruptedData,
            AuthError::Hashing(_) => ErrorKind::Internal,
            AuthError::InvalidSetup(_) => ErrorKind::InvalidInput,
        }
    }

    /// Log the error: faults at `error`, rejected input at `debug`
    pub fn log(&self, operation: &'static str) {
        let kind = self.kind();
        if kind.is_fault() {
            tracing::error!(operation, kind = %kind, error = %self, "Auth operation failed");
        } else {
            tracing::debug!(operation, kind = %kind, error = %self, "Auth request rejected");
        }
    }
}
