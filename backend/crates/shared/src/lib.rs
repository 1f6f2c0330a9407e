//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Error classification shared by every crate
//! - Typed ID wrappers for content records
//! - Bilingual text and the site language
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod kind;

    pub use kind::ErrorKind;
}
pub mod id;
pub mod text;

pub use text::{BilingualText, Language};
