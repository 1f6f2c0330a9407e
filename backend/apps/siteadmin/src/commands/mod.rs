//! Command implementations
//!
//! Each command returns a [`Reply`] rendered by `main` in the stored
//! language. Commands never print.

pub mod admin;
pub mod domain;
pub mod language;

use std::sync::Arc;

use auth::{CredentialStore, KvCredentialStore};
use kernel::error::ErrorKind;
use kernel::{BilingualText, Language};
use platform::storage::JsonFileStore;
use site::LanguagePreference;

use crate::config::AppConfig;

/// How the process should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed(ErrorKind),
}

/// User-facing result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub outcome: Outcome,
    pub message: BilingualText,
}

impl Reply {
    pub fn ok(english: impl Into<String>, hindi: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Success,
            message: BilingualText::new(english, hindi),
        }
    }

    pub fn fail(kind: ErrorKind, english: impl Into<String>, hindi: impl Into<String>) -> Self {
        Self::fail_text(kind, BilingualText::new(english, hindi))
    }

    pub fn fail_text(kind: ErrorKind, message: BilingualText) -> Self {
        Self {
            outcome: Outcome::Failed(kind),
            message,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Stores opened for one invocation
pub struct Context {
    pub store: KvCredentialStore<JsonFileStore, JsonFileStore>,
    pub preference: LanguagePreference<JsonFileStore>,
    pub language: Language,
}

impl Context {
    /// Open the stores, load the language and restore any session
    pub async fn open(config: &AppConfig) -> Self {
        let durable = Arc::new(JsonFileStore::new(config.storage_file()));
        let session = Arc::new(JsonFileStore::new(&config.session_file));

        let store = CredentialStore::from_stores(
            durable.clone(),
            session,
            Arc::new(config.auth.clone()),
        );
        let preference = LanguagePreference::new(durable);
        let language = preference.load().await;

        let restored = store.restore_session().await;
        tracing::debug!(restored, language = %language, "Context opened");

        Self {
            store,
            preference,
            language,
        }
    }
}
