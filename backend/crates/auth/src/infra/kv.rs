//! Key-Value Repository Implementations
//!
//! The credential is one JSON record `{"username", "passwordHash"}` under
//! `admin_credentials` in durable storage. The session marker is the string
//! `"true"` under `admin_auth` in session-scoped storage.

use std::sync::Arc;

use platform::password::PasswordDigest;
use platform::storage::KeyValueStore;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::application::credential_store::CredentialStore;
use crate::domain::entity::AdminCredential;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::{AuthError, AuthResult};

const SESSION_MARKER: &str = "true";

/// Stored form of the admin credential
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredential {
    username: String,
    password_hash: String,
}

impl From<&AdminCredential> for StoredCredential {
    fn from(credential: &AdminCredential) -> Self {
        Self {
            username: credential.username.clone(),
            password_hash: credential.password_hash.as_str().to_string(),
        }
    }
}

impl TryFrom<StoredCredential> for AdminCredential {
    type Error = AuthError;

    fn try_from(stored: StoredCredential) -> Result<Self, Self::Error> {
        let password_hash = PasswordDigest::from_stored(stored.password_hash)
            .map_err(|e| AuthError::CorruptedCredential(e.to_string()))?;
        Ok(AdminCredential::new(stored.username, password_hash))
    }
}

// ============================================================================
// Credential Repository
// ============================================================================

/// Credential repository over a durable key-value store
pub struct KvCredentialRepository<S> {
    store: Arc<S>,
    key: String,
}

impl<S> KvCredentialRepository<S> {
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl<S> CredentialRepository for KvCredentialRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    async fn exists(&self) -> AuthResult<bool> {
        let value = self.store.get(&self.key).await?;
        Ok(value.is_some_and(|v| !v.is_empty()))
    }

    async fn find(&self) -> AuthResult<Option<AdminCredential>> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        let stored: StoredCredential = serde_json::from_str(&raw)
            .map_err(|e| AuthError::CorruptedCredential(e.to_string()))?;
        stored.try_into().map(Some)
    }

    async fn save(&self, credential: &AdminCredential) -> AuthResult<()> {
        let raw = serde_json::to_string(&StoredCredential::from(credential))
            .map_err(|e| AuthError::CorruptedCredential(e.to_string()))?;
        self.store.set(&self.key, &raw).await?;
        Ok(())
    }
}

// ============================================================================
// Session Repository
// ============================================================================

/// Session marker over a session-scoped key-value store
pub struct KvSessionRepository<S> {
    store: Arc<S>,
    key: String,
}

impl<S> KvSessionRepository<S> {
    pub fn new(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl<S> SessionRepository for KvSessionRepository<S>
where
    S: KeyValueStore + Send + Sync,
{
    async fn get(&self) -> AuthResult<bool> {
        let value = self.store.get(&self.key).await?;
        Ok(value.as_deref() == Some(SESSION_MARKER))
    }

    async fn set(&self) -> AuthResult<()> {
        self.store.set(&self.key, SESSION_MARKER).await?;
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        self.store.remove(&self.key).await?;
        Ok(())
    }
}

// ============================================================================
// Wiring
// ============================================================================

impl<D, S> CredentialStore<KvCredentialRepository<D>, KvSessionRepository<S>>
where
    D: KeyValueStore + Send + Sync,
    S: KeyValueStore + Send + Sync,
{
    /// Build a store over a durable and a session-scoped key-value store,
    /// using the keys from `config`.
    pub fn from_stores(durable: Arc<D>, session: Arc<S>, config: Arc<AuthConfig>) -> Self {
        let credential_repo = Arc::new(KvCredentialRepository::new(
            durable,
            config.credentials_key.clone(),
        ));
        let session_repo = Arc::new(KvSessionRepository::new(
            session,
            config.session_key.clone(),
        ));
        CredentialStore::new(credential_repo, session_repo, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::sha256_hex;
    use platform::password::{ClearTextPassword, PasswordScheme};
    use platform::storage::{JsonFileStore, MemoryStore};

    fn credential(username: &str, password: &str) -> AdminCredential {
        let hash = ClearTextPassword::new(password)
            .hash(PasswordScheme::Sha256Hex)
            .unwrap();
        AdminCredential::new(username, hash)
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = Arc::new(MemoryStore::new());
        let repo = KvCredentialRepository::new(store.clone(), "admin_credentials");

        assert!(!repo.exists().await.unwrap());
        assert!(repo.find().await.unwrap().is_none());

        repo.save(&credential("admin", "secret1")).await.unwrap();
        assert!(repo.exists().await.unwrap());

        let found = repo.find().await.unwrap().unwrap();
        assert_eq!(found.username, "admin");
        assert_eq!(found.password_hash.as_str(), sha256_hex(b"secret1"));
    }

    #[tokio::test]
    async fn test_empty_value_is_absent() {
        let store = Arc::new(MemoryStore::new());
        store.set("admin_credentials", "").await.unwrap();
        let repo = KvCredentialRepository::new(store, "admin_credentials");

        assert!(!repo.exists().await.unwrap());
        assert!(repo.find().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupted_record() {
        let store = Arc::new(MemoryStore::new());
        let repo = KvCredentialRepository::new(store.clone(), "admin_credentials");

        store.set("admin_credentials", "[1,2,3]").await.unwrap();
        assert!(repo.exists().await.unwrap());
        assert!(matches!(
            repo.find().await,
            Err(AuthError::CorruptedCredential(_))
        ));

        store
            .set("admin_credentials", r#"{"username":"admin"}"#)
            .await
            .unwrap();
        assert!(matches!(
            repo.find().await,
            Err(AuthError::CorruptedCredential(_))
        ));
    }

    #[tokio::test]
    async fn test_session_marker() {
        let store = Arc::new(MemoryStore::new());
        let repo = KvSessionRepository::new(store.clone(), "admin_auth");

        assert!(!repo.get().await.unwrap());
        repo.set().await.unwrap();
        assert!(repo.get().await.unwrap());
        assert_eq!(store.get("admin_auth").await.unwrap().as_deref(), Some("true"));

        repo.clear().await.unwrap();
        assert!(!repo.get().await.unwrap());

        store.set("admin_auth", "false").await.unwrap();
        assert!(!repo.get().await.unwrap());
    }

    #[tokio::test]
    async fn test_credentials_persist_across_processes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let config = Arc::new(AuthConfig::default());

        {
            let store = CredentialStore::from_stores(
                Arc::new(JsonFileStore::new(&path)),
                Arc::new(MemoryStore::new()),
                config.clone(),
            );
            store.create_credentials("admin", "secret1").await.unwrap();
        }

        // New process: durable file survives, session storage does not
        let store = CredentialStore::from_stores(
            Arc::new(JsonFileStore::new(&path)),
            Arc::new(MemoryStore::new()),
            config,
        );
        assert!(store.has_credentials().await);
        assert!(!store.restore_session().await);
        assert!(store.login("admin", "secret1").await);
    }

    #[tokio::test]
    async fn test_custom_keys() {
        let durable = Arc::new(MemoryStore::new());
        let session = Arc::new(MemoryStore::new());
        let config = Arc::new(AuthConfig {
            credentials_key: "site_admin".to_string(),
            session_key: "site_admin_session".to_string(),
            ..AuthConfig::default()
        });

        let store = CredentialStore::from_stores(durable.clone(), session.clone(), config);
        store.create_credentials("admin", "secret1").await.unwrap();
        assert!(store.login("admin", "secret1").await);

        assert!(durable.get("site_admin").await.unwrap().is_some());
        assert!(session.get("site_admin_session").await.unwrap().is_some());
        assert!(durable.get("admin_credentials").await.unwrap().is_none());
    }
}
