//! Application Configuration
//!
//! Read from the environment (after `.env` is loaded):
//! - `SITEADMIN_DATA_DIR` - directory of the durable store (default `./data`)
//! - `SITEADMIN_SESSION_FILE` - session store file (default in the temp dir,
//!   named after the data dir so separate sites keep separate logins)
//! - `SITEADMIN_PASSWORD_SCHEME` - `sha256` (default) or `argon2id`

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use auth::AuthConfig;
use auth::application::config::PasswordScheme;

pub const DATA_DIR_VAR: &str = "SITEADMIN_DATA_DIR";
pub const SESSION_FILE_VAR: &str = "SITEADMIN_SESSION_FILE";
pub const PASSWORD_SCHEME_VAR: &str = "SITEADMIN_PASSWORD_SCHEME";

const DEFAULT_DATA_DIR: &str = "data";
const SESSION_FILE_PREFIX: &str = "siteadmin-session";
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub session_file: PathBuf,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let data_dir = lookup(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let session_file = lookup(SESSION_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_session_file(&data_dir));

        let password_scheme = match lookup(PASSWORD_SCHEME_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<PasswordScheme>()
                .with_context(|| format!("{PASSWORD_SCHEME_VAR} is invalid"))?,
            None => PasswordScheme::default(),
        };

        Ok(Self {
            data_dir,
            session_file,
            auth: AuthConfig::default().with_password_scheme(password_scheme),
        })
    }

    /// Durable JSON store holding the credential and the language preference
    pub fn storage_file(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }
}

/// Session file in the temp dir, keyed by the absolute data dir
fn default_session_file(data_dir: &Path) -> PathBuf {
    let data_dir = std::path::absolute(data_dir).unwrap_or_else(|_| data_dir.to_path_buf());
    let digest = platform::crypto::sha256_hex(data_dir.as_os_str().as_encoded_bytes());
    env::temp_dir().join(format!("{SESSION_FILE_PREFIX}-{}.json", &digest[..16]))
}
