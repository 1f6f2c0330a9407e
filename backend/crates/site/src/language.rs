//! Language Preference
//!
//! The visitor-facing language is kept in durable storage under `language`.
//! Anything unreadable falls back to Hindi.

use std::sync::Arc;

use kernel::Language;
use platform::storage::{KeyValueStore, StorageResult};

/// Durable storage key of the language preference
pub const LANGUAGE_KEY: &str = "language";

/// Persisted language preference
pub struct LanguagePreference<S> {
    store: Arc<S>,
    key: String,
}

impl<S> LanguagePreference<S>
where
    S: KeyValueStore + Send + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, LANGUAGE_KEY)
    }

    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored language, or the default when absent or unreadable
    pub async fn load(&self) -> Language {
        match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw.parse::<Language>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Unknown stored language, using default");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read language preference, using default");
                Language::default()
            }
        }
    }

    pub async fn save(&self, language: Language) -> StorageResult<()> {
        self.store.set(&self.key, language.as_str()).await?;
        tracing::debug!(language = %language, "Language preference saved");
        Ok(())
    }

    /// Switch to the other language and persist it
    pub async fn toggle(&self) -> StorageResult<Language> {
        let next = self.load().await.toggle();
        self.save(next).await?;
        Ok(next)
    }
}
