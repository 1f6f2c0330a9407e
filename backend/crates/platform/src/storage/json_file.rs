//! JSON file key-value store
//!
//! Durable storage backed by a single JSON object on disk. Every write
//! rewrites the whole file through a uniquely named temporary sibling and a
//! rename, so a crash leaves either the old or the new content and
//! concurrent writers never share a temp file.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use super::{KeyValueStore, StorageError, StorageResult};

/// File-backed store
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StorageResult<BTreeMap<String, String>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(map_io(e)),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            StorageError::Corrupted(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir).await.map_err(map_io)?;

        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Corrupted(e.to_string()))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, body.as_bytes()))
            .await
            .map_err(|e| StorageError::Unavailable(format!("write task failed: {e}")))??;

        tracing::debug!(path = %self.path.display(), keys = entries.len(), "Storage file written");
        Ok(())
    }
}

/// Write to a fresh temp file in `dir`, then rename it over `path`.
/// The temp file is removed when any step fails.
fn write_atomically(dir: &Path, path: &Path, body: &[u8]) -> StorageResult<()> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(map_io)?;
    tmp.write_all(body).map_err(map_io)?;
    tmp.as_file().sync_all().map_err(map_io)?;
    tmp.persist(path).map_err(|e| map_io(e.error))?;
    Ok(())
}

fn map_io(err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::PermissionDenied => StorageError::AccessDenied(err.to_string()),
        _ => StorageError::Io(err),
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut entries = self.load().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}
