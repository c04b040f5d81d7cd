//! Credential persistence.
//!
//! [`CredentialStore`] is the seam between the token cache and durable
//! storage. [`FileStore`] keeps a single JSON record on disk; [`MemoryStore`]
//! keeps it in process, for tests.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_lock::RwLock;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::auth::Credential;
use crate::error::StoreError;

/// Durable home of the single current [`Credential`].
///
/// Last writer wins; there is no versioning and no cross-process locking.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Read the current credential. `Ok(None)` when nothing has been saved.
    async fn load(&self) -> Result<Option<Credential>, StoreError>;

    /// Replace the current credential.
    async fn save(&self, credential: &Credential) -> Result<(), StoreError>;

    /// Forget the current credential. A no-op when nothing is stored.
    async fn clear(&self) -> Result<(), StoreError>;
}

// ============================================================================
// FileStore
// ============================================================================

/// A JSON file holding `{"token": ..., "timestamp": ...}`.
///
/// A missing file reads as "no credential"; unparsable content is an error.
/// Saves write a sibling temp file and rename it over the target, so readers
/// see either the old or the new record.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A sibling path unique to this process and save, so overlapping saves
    /// never share a temp file.
    fn temp_path(&self) -> PathBuf {
        static NEXT: AtomicU64 = AtomicU64::new(0);

        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(
            ".{}.{}.tmp",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        self.path.with_file_name(name)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn load(&self) -> Result<Option<Credential>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No credential file");
                return Ok(None);
            }
            Err(e) => return Err(io_error(&self.path, e)),
        };

        let credential: Credential =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), "Credential read");
        Ok(Some(credential))
    }

    async fn save(&self, credential: &Credential) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let json =
            serde_json::to_string(credential).map_err(|source| StoreError::Encode { source })?;

        let temp = self.temp_path();
        let written = match tokio::fs::write(&temp, json).await {
            Ok(()) => tokio::fs::rename(&temp, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
                debug!(path = %temp.display(), error = %cleanup, "Temp file not removed");
            }
            return Err(io_error(&temp, e));
        }

        info!(path = %self.path.display(), "Credential saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path.display(), "Credential removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&self.path, e)),
        }
    }
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-process store. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    credential: Arc<RwLock<Option<Credential>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Arc::new(RwLock::new(Some(credential))),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn load(&self) -> Result<Option<Credential>, StoreError> {
        let credential = self.credential.read().await.clone();
        debug!(present = credential.is_some(), "Credential read from memory");
        Ok(credential)
    }

    async fn save(&self, credential: &Credential) -> Result<(), StoreError> {
        *self.credential.write().await = Some(credential.clone());
        debug!("Credential saved to memory");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.credential.write().await = None;
        debug!("Credential cleared from memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> Credential {
        Credential::new("tok123", Utc.timestamp_millis_opt(1_718_000_000_123).unwrap())
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("token.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("Utils").join("token.json"));

        store.save(&sample()).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, sample());

        let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("Utils"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("token.json")]);
    }

    #[test]
    fn test_file_store_temp_paths_are_distinct_siblings() {
        let store = FileStore::new("/data/Utils/token.json");
        let first = store.temp_path();
        let second = store.temp_path();

        assert_ne!(first, second);
        assert_eq!(first.parent(), store.path().parent());
        assert!(first.to_string_lossy().ends_with(".tmp"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_file_store_concurrent_saves_all_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");

        for round in 0..20 {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let store = FileStore::new(&path);
                    tokio::spawn(async move {
                        store
                            .save(&Credential::issue(format!("tok-{round}-{i}")))
                            .await
                    })
                })
                .collect();
            for handle in handles {
                handle.await.unwrap().unwrap();
            }

            let stored = FileStore::new(&path).load().await.unwrap().unwrap();
            assert!(stored.token.starts_with(&format!("tok-{round}-")));
        }

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_file_store_failed_save_reports_temp_path() {
        let dir = tempfile::tempdir().unwrap();
        // The target is a non-empty directory, so the rename over it fails.
        let path = dir.path().join("token.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = FileStore::new(&path).save(&sample()).await.unwrap_err();
        match err {
            StoreError::Io { path: reported, .. } => {
                assert_ne!(reported, path);
                assert!(reported.to_string_lossy().ends_with(".tmp"));
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_file_store_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("token.json"));

        store.save(&sample()).await.unwrap();
        let newer = Credential::issue("tok456");
        store.save(&newer).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(newer));
    }

    #[tokio::test]
    async fn test_file_store_reads_external_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, r#"{"token":"tok123","timestamp":1718000000123}"#).unwrap();

        let loaded = FileStore::new(&path).load().await.unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[tokio::test]
    async fn test_file_store_malformed_content_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_file_store_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("token.json"));

        store.clear().await.unwrap();
        store.save(&sample()).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let cloned = store.clone();

        cloned.save(&sample()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(sample()));

        store.clear().await.unwrap();
        assert!(cloned.load().await.unwrap().is_none());
    }
}
