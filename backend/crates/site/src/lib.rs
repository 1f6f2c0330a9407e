//! Site Utilities
//!
//! - `domain_validator` - Custom domain checks for the admin page
//! - `language` - Persisted Hindi/English preference
//! - `content` - Content API data model and interface

pub mod content;
pub mod domain_validator;
pub mod language;

pub use content::{ContentApi, ContentError, ContentResult, MemoryContentApi};
pub use domain_validator::{
    CustomDomainCheck, DomainValidationResult, DomainViolation, check_custom_domain, normalize,
    validate,
};
pub use language::LanguagePreference;
