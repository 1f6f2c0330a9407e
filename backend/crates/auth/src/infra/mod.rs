//! Infrastructure Layer
//!
//! Repository implementations over key-value storage.

pub mod kv;

pub use kv::{KvCredentialRepository, KvSessionRepository};
