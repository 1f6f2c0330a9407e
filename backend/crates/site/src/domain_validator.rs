//! Domain Validator
//!
//! Checks a custom domain entered on the admin page. Rules run in a fixed
//! order on the trimmed input and the first failure wins:
//!
//! 1. empty
//! 2. shorter than [`DOMAIN_MIN_LENGTH`]
//! 3. longer than [`DOMAIN_MAX_LENGTH`]
//! 4. label grammar (ASCII letters, digits, hyphens, dots; labels of at most
//!    [`LABEL_MAX_LENGTH`]; inner labels do not start or end with a hyphen)
//! 5. no dot (missing TLD)
//! 6. consecutive dots
//! 7. leading or trailing dot or hyphen
//!
//! Rule 4 leaves the ends of the string and empty labels to rules 6 and 7 so
//! that each of those keeps its own message.

use serde::Serialize;
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Minimum domain length (in characters)
pub const DOMAIN_MIN_LENGTH: usize = 5;

/// Maximum domain length (in characters)
pub const DOMAIN_MAX_LENGTH: usize = 253;

/// Maximum label length (in characters)
pub const LABEL_MAX_LENGTH: usize = 63;

const VALID_MESSAGE: &str = "Valid domain name.";

// ============================================================================
// Result types
// ============================================================================

/// The rule a domain failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainViolation {
    Empty,
    TooShort,
    TooLong,
    BadFormat,
    MissingTld,
    ConsecutiveDots,
    EdgeDotOrHyphen,
}

impl DomainViolation {
    /// User-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Domain name cannot be empty. Example: www.example.org",
            Self::TooShort => {
                "Domain name must be at least 5 characters long. Example: www.example.org"
            }
            Self::TooLong => "Domain name must not exceed 253 characters.",
            Self::BadFormat => {
                "Invalid domain format. Domain must contain only letters, numbers, hyphens, and dots. Labels cannot start or end with hyphens. Example: www.example.org"
            }
            Self::MissingTld => {
                "Domain must include a top-level domain (TLD). Example: www.example.org"
            }
            Self::ConsecutiveDots => "Domain cannot contain consecutive dots.",
            Self::EdgeDotOrHyphen => "Domain cannot start or end with a dot or hyphen.",
        }
    }
}

impl fmt::Display for DomainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainValidationResult {
    pub is_valid: bool,
    pub message: String,
    pub violation: Option<DomainViolation>,
}

impl DomainValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: VALID_MESSAGE.to_string(),
            violation: None,
        }
    }

    fn invalid(violation: DomainViolation) -> Self {
        Self {
            is_valid: false,
            message: violation.message().to_string(),
            violation: Some(violation),
        }
    }
}

/// Normalized domain together with its validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomDomainCheck {
    pub domain: String,
    pub result: DomainValidationResult,
}

// ============================================================================
// Operations
// ============================================================================

/// Trim surrounding whitespace and lower-case
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Validate a domain name. Never fails; problems are reported in the result.
pub fn validate(domain: &str) -> DomainValidationResult {
    match check(domain.trim()) {
        Ok(()) => DomainValidationResult::valid(),
        Err(violation) => DomainValidationResult::invalid(violation),
    }
}

/// Normalize, then validate
pub fn check_custom_domain(input: &str) -> CustomDomainCheck {
    let domain = normalize(input);
    let result = validate(&domain);

    tracing::debug!(
        domain = %domain,
        is_valid = result.is_valid,
        violation = ?result.violation,
        "Custom domain checked"
    );

    CustomDomainCheck { domain, result }
}

fn check(domain: &str) -> Result<(), DomainViolation> {
    if domain.is_empty() {
        return Err(DomainViolation::Empty);
    }

    let length = domain.chars().count();
    if length < DOMAIN_MIN_LENGTH {
        return Err(DomainViolation::TooShort);
    }
    if length > DOMAIN_MAX_LENGTH {
        return Err(DomainViolation::TooLong);
    }

    if !has_valid_labels(domain) {
        return Err(DomainViolation::BadFormat);
    }

    if !domain.contains('.') {
        return Err(DomainViolation::MissingTld);
    }

    if domain.contains("..") {
        return Err(DomainViolation::ConsecutiveDots);
    }

    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
        return Err(DomainViolation::EdgeDotOrHyphen);
    }

    Ok(())
}

fn has_valid_labels(domain: &str) -> bool {
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let last = labels.len() - 1;

    labels.iter().enumerate().all(|(i, label)| {
        if label.is_empty() {
            return true;
        }
        if label.len() > LABEL_MAX_LENGTH {
            return false;
        }
        // Hyphens at the very ends of the string are reported by rule 7
        let bad_start = i != 0 && label.starts_with('-');
        let bad_end = i != last && label.ends_with('-');
        !bad_start && !bad_end
    })
}
