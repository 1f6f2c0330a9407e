//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every crate in the workspace.
//! Crate-specific error enums map onto it through a `kind()` method so the
//! binary can pick an exit status and a log level without knowing each crate.

use serde::Serialize;

/// Error classification
///
/// ## Notes
/// * `non_exhaustive` - more kinds may be added later
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::StorageUnavailable;
/// assert_eq!(kind.exit_code(), 74);
/// assert!(kind.is_fault());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input rejected by a validation rule
    InvalidInput,
    /// Credentials did not match or no session exists
    Unauthorized,
    /// A referenced record does not exist
    NotFound,
    /// A record with the same identity already exists
    Conflict,
    /// Durable or session storage could not be read or written
    StorageUnavailable,
    /// Stored data exists but cannot be decoded
    CorruptedData,
    /// Anything else
    Internal,
}

impl ErrorKind {
    /// Process exit status for this kind (BSD `sysexits.h` values)
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidInput.exit_code(), 65);
    /// assert_eq!(ErrorKind::Unauthorized.exit_code(), 77);
    /// ```
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::InvalidInput => 65,
            ErrorKind::Unauthorized => 77,
            ErrorKind::NotFound => 66,
            ErrorKind::Conflict => 73,
            ErrorKind::StorageUnavailable => 74,
            ErrorKind::CorruptedData => 65,
            ErrorKind::Internal => 70,
        }
    }

    /// Short human-readable label
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::StorageUnavailable => "Storage Unavailable",
            ErrorKind::CorruptedData => "Corrupted Data",
            ErrorKind::Internal => "Internal Error",
        }
    }

    /// Whether the error points at the environment rather than the caller
    #[inline]
    pub const fn is_fault(&self) -> bool {
        matches!(
            self,
            ErrorKind::StorageUnavailable | ErrorKind::CorruptedData | ErrorKind::Internal
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
