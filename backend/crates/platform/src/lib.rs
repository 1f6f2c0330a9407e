//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, hex, constant-time comparison)
//! - Password digests (SHA-256 hex, Argon2id)
//! - Key-value storage capability with in-memory and JSON-file backends

pub mod crypto;
pub mod password;
pub mod storage;
