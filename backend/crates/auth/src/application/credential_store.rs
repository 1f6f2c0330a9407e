//! Credential Store
//!
//! The component presentation code talks to. It composes the use cases and
//! turns their `AuthResult`s into fail-closed answers: any fault reads as
//! "not authenticated" or "setup required" and is only visible in the log.
//! `create_credentials` is the one operation that reports storage failures.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::config::AuthConfig;
use crate::application::restore_session::RestoreSessionUseCase;
use crate::application::setup::{SetupForm, SetupInput, SetupUseCase};
use crate::application::sign_in::{SignInInput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::AuthResult;

/// Single-admin credential store with an in-memory authenticated flag
pub struct CredentialStore<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    setup: SetupUseCase<C>,
    sign_in: SignInUseCase<C, S>,
    sign_out: SignOutUseCase<S>,
    restore: RestoreSessionUseCase<C, S>,
    config: Arc<AuthConfig>,
    authenticated: AtomicBool,
}

impl<C, S> CredentialStore<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(credential_repo: Arc<C>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            setup: SetupUseCase::new(credential_repo.clone(), config.clone()),
            sign_in: SignInUseCase::new(
                credential_repo.clone(),
                session_repo.clone(),
                config.clone(),
            ),
            sign_out: SignOutUseCase::new(session_repo.clone()),
            restore: RestoreSessionUseCase::new(credential_repo, session_repo),
            config,
            authenticated: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Whether an admin credential exists. `false` on storage failure.
    pub async fn has_credentials(&self) -> bool {
        fail_closed(self.setup.has_credentials().await, "has_credentials", false)
    }

    /// Store a new credential, overwriting any previous one
    pub async fn create_credentials(&self, username: &str, password: &str) -> AuthResult<()> {
        self.setup
            .execute(SetupInput {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await
            .inspect_err(|e| e.log("create_credentials"))
    }

    /// Validate the setup form, then create the credential
    pub async fn setup(&self, form: SetupForm) -> AuthResult<()> {
        form.validate(&self.config)?;
        let input = form.into_input();
        self.create_credentials(&input.username, &input.password)
            .await
    }

    /// `true` and a session marker on an exact match; `false` otherwise,
    /// including on any internal fault.
    pub async fn login(&self, username: &str, password: &str) -> bool {
        let result = self
            .sign_in
            .execute(SignInInput {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await;

        let signed_in = fail_closed(result, "login", false);
        if signed_in {
            self.authenticated.store(true, Ordering::SeqCst);
        }
        signed_in
    }

    /// Clear the session marker. The in-memory flag drops even if the
    /// storage write fails.
    pub async fn logout(&self) {
        if let Err(e) = self.sign_out.execute().await {
            e.log("logout");
        }
        self.authenticated.store(false, Ordering::SeqCst);
    }

    /// Re-establish authentication from the session marker at start-up
    pub async fn restore_session(&self) -> bool {
        let restored = fail_closed(self.restore.execute().await, "restore_session", false);
        self.authenticated.store(restored, Ordering::SeqCst);
        restored
    }

    /// In-memory authentication state of this process
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

/// Log the error and substitute the safe default
fn fail_closed<T>(result: AuthResult<T>, operation: &'static str, fallback: T) -> T {
    result.unwrap_or_else(|e| {
        e.log(operation);
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::setup::SetupFormError;
    use crate::error::AuthError;
    use crate::infra::kv::{KvCredentialRepository, KvSessionRepository};
    use platform::crypto::sha256_hex;
    use platform::password::PasswordScheme;
    use platform::storage::{KeyValueStore, MemoryStore};

    type TestStore = CredentialStore<KvCredentialRepository<MemoryStore>, KvSessionRepository<MemoryStore>>;

    struct Fixture {
        durable: Arc<MemoryStore>,
        session: Arc<MemoryStore>,
        store: TestStore,
    }

    fn fixture_with(config: AuthConfig) -> Fixture {
        let durable = Arc::new(MemoryStore::new());
        let session = Arc::new(MemoryStore::new());
        let store = CredentialStore::from_stores(durable.clone(), session.clone(), Arc::new(config));
        Fixture {
            durable,
            session,
            store,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(AuthConfig::default())
    }

    /// Same storage, fresh process (in-memory flag reset)
    fn reload(f: &Fixture) -> TestStore {
        CredentialStore::from_stores(f.durable.clone(), f.session.clone(), Arc::new(AuthConfig::default()))
    }

    #[tokio::test]
    async fn test_has_credentials_after_create() {
        let f = fixture();
        assert!(!f.store.has_credentials().await);

        f.store.create_credentials("admin", "secret1").await.unwrap();
        assert!(f.store.has_credentials().await);
    }

    #[tokio::test]
    async fn test_login_exact_password_only() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();

        assert!(!f.store.login("admin", "secret1x").await);
        assert!(!f.store.is_authenticated());

        assert!(f.store.login("admin", "secret1").await);
        assert!(f.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_username_case_sensitive() {
        let f = fixture();
        f.store.create_credentials("Admin", "secret1").await.unwrap();
        assert!(!f.store.login("admin", "secret1").await);
        assert!(f.store.login("Admin", "secret1").await);
    }

    #[tokio::test]
    async fn test_login_without_credentials() {
        let f = fixture();
        assert!(!f.store.login("admin", "secret1").await);
        assert_eq!(f.session.get("admin_auth").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_sets_session_marker() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        assert!(f.store.login("admin", "secret1").await);
        assert_eq!(
            f.session.get("admin_auth").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_stored_record_format() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();

        let raw = f.durable.get("admin_credentials").await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["username"], "admin");
        assert_eq!(json["passwordHash"], sha256_hex(b"secret1"));
        assert!(!raw.contains("secret1\""));
    }

    #[tokio::test]
    async fn test_create_overwrites() {
        let f = fixture();
        f.store.create_credentials("first", "secret1").await.unwrap();
        f.store.create_credentials("second", "secret2").await.unwrap();

        assert!(!f.store.login("first", "secret1").await);
        assert!(f.store.login("second", "secret2").await);
    }

    #[tokio::test]
    async fn test_no_validation_in_create() {
        let f = fixture();
        // Short values are the caller's concern
        f.store.create_credentials("a", "").await.unwrap();
        assert!(f.store.login("a", "").await);
    }

    #[tokio::test]
    async fn test_logout_then_restore() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        assert!(f.store.login("admin", "secret1").await);

        f.store.logout().await;
        assert!(!f.store.is_authenticated());

        let reloaded = reload(&f);
        assert!(!reloaded.restore_session().await);
        assert!(!reloaded.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_after_login() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        assert!(f.store.login("admin", "secret1").await);

        let reloaded = reload(&f);
        assert!(!reloaded.is_authenticated());
        assert!(reloaded.restore_session().await);
        assert!(reloaded.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_discards_orphaned_marker() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        assert!(f.store.login("admin", "secret1").await);

        // Credential removed out of band
        f.durable.remove("admin_credentials").await.unwrap();

        let reloaded = reload(&f);
        assert!(!reloaded.restore_session().await);
        assert_eq!(f.session.get("admin_auth").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_ignores_non_true_marker() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        f.session.set("admin_auth", "yes").await.unwrap();
        assert!(!f.store.restore_session().await);
    }

    #[tokio::test]
    async fn test_read_faults_fail_closed() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        assert!(f.store.login("admin", "secret1").await);

        f.durable.set_fail_reads(true);
        assert!(!f.store.has_credentials().await);
        assert!(!f.store.login("admin", "secret1").await);

        let reloaded = reload(&f);
        assert!(!reloaded.restore_session().await);

        f.durable.set_fail_reads(false);
        f.session.set_fail_reads(true);
        assert!(!reloaded.restore_session().await);
    }

    #[tokio::test]
    async fn test_session_write_fault_fails_login() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        f.session.set_fail_writes(true);
        assert!(!f.store.login("admin", "secret1").await);
        assert!(!f.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_survives_write_fault() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        assert!(f.store.login("admin", "secret1").await);

        f.session.set_fail_writes(true);
        f.store.logout().await;
        assert!(!f.store.is_authenticated());
    }

    #[tokio::test]
    async fn test_create_reports_storage_error() {
        let f = fixture();
        f.durable.set_fail_writes(true);
        let err = f.store.create_credentials("admin", "secret1").await.unwrap_err();
        assert!(matches!(err, AuthError::Storage(_)));
        assert!(!f.store.has_credentials().await);
    }

    #[tokio::test]
    async fn test_create_reports_quota() {
        let durable = Arc::new(MemoryStore::with_quota(16));
        let session = Arc::new(MemoryStore::new());
        let store = CredentialStore::from_stores(durable, session, Arc::new(AuthConfig::default()));
        let err = store.create_credentials("admin", "secret1").await.unwrap_err();
        assert_eq!(err.kind(), kernel::error::ErrorKind::StorageUnavailable);
    }

    #[tokio::test]
    async fn test_corrupted_record_fails_login() {
        let f = fixture();
        f.durable.set("admin_credentials", "{not json").await.unwrap();

        // Presence is all has_credentials looks at
        assert!(f.store.has_credentials().await);
        assert!(!f.store.login("admin", "secret1").await);

        f.durable
            .set("admin_credentials", r#"{"username":"admin","passwordHash":"XYZ"}"#)
            .await
            .unwrap();
        assert!(!f.store.login("admin", "secret1").await);
    }

    #[tokio::test]
    async fn test_record_written_elsewhere_verifies() {
        let f = fixture();
        let record = format!(
            r#"{{"username":"admin","passwordHash":"{}"}}"#,
            sha256_hex(b"secret1")
        );
        f.durable.set("admin_credentials", &record).await.unwrap();
        assert!(f.store.login("admin", "secret1").await);
    }

    #[tokio::test]
    async fn test_argon2_scheme() {
        let f = fixture_with(AuthConfig::hardened());
        f.store.create_credentials("admin", "secret1").await.unwrap();

        let raw = f.durable.get("admin_credentials").await.unwrap().unwrap();
        assert!(raw.contains("$argon2id$"));

        assert!(f.store.login("admin", "secret1").await);
        assert!(!f.store.login("admin", "secret2").await);

        // A default-scheme process still verifies the record and keeps it
        let reloaded = reload(&f);
        assert!(reloaded.login("admin", "secret1").await);
        assert_eq!(
            reloaded.config().password_scheme,
            PasswordScheme::Sha256Hex
        );
        let raw = f.durable.get("admin_credentials").await.unwrap().unwrap();
        assert!(raw.contains("$argon2id$"));
    }

    #[tokio::test]
    async fn test_hardened_login_upgrades_sha256_record() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();

        let hardened = CredentialStore::from_stores(
            f.durable.clone(),
            f.session.clone(),
            Arc::new(AuthConfig::hardened()),
        );

        // A failed login leaves the record alone
        assert!(!hardened.login("admin", "wrong!").await);
        let raw = f.durable.get("admin_credentials").await.unwrap().unwrap();
        assert!(raw.contains(&sha256_hex(b"secret1")));

        assert!(hardened.login("admin", "secret1").await);
        let raw = f.durable.get("admin_credentials").await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["username"], "admin");
        assert!(json["passwordHash"].as_str().unwrap().starts_with("$argon2id$"));

        // The upgraded record verifies under either config
        assert!(reload(&f).login("admin", "secret1").await);
        assert!(!reload(&f).login("admin", "secret1x").await);
    }

    #[tokio::test]
    async fn test_upgrade_failure_does_not_block_login() {
        let f = fixture();
        f.store.create_credentials("admin", "secret1").await.unwrap();
        f.durable.set_fail_writes(true);

        let hardened = CredentialStore::from_stores(
            f.durable.clone(),
            f.session.clone(),
            Arc::new(AuthConfig::hardened()),
        );
        assert!(hardened.login("admin", "secret1").await);
        assert!(hardened.is_authenticated());

        let raw = f.durable.get("admin_credentials").await.unwrap().unwrap();
        assert!(raw.contains(&sha256_hex(b"secret1")));
    }

    #[tokio::test]
    async fn test_setup_validates_form() {
        let f = fixture();
        let err = f
            .store
            .setup(SetupForm {
                username: "admin".into(),
                password: "secret1".into(),
                confirm_password: "secret2".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AuthError::InvalidSetup(SetupFormError::PasswordMismatch)
        ));
        assert!(!f.store.has_credentials().await);

        f.store
            .setup(SetupForm {
                username: "admin".into(),
                password: "secret1".into(),
                confirm_password: "secret1".into(),
            })
            .await
            .unwrap();
        assert!(f.store.login("admin", "secret1").await);
    }
}
