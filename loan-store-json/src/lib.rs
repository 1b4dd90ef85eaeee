//! JSON-file backend for the application snapshot.
//!
//! The browser original kept the whole application under a single
//! localStorage key; this backend keeps the same contract with one JSON
//! file at a fixed path. Persisting rewrites the file in full (via a
//! sibling temp file and a rename, so a crash mid-write never leaves a
//! torn snapshot). A missing or unparsable file restores as "no data" —
//! the caller falls back to defaults without seeing an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use loan_core::models::ApplicationState;
use loan_core::store::{SnapshotStore, StoreError};

/// Default snapshot file name, the localStorage-key equivalent.
pub const DEFAULT_SNAPSHOT_FILE: &str = "loan-application.json";

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Snapshot file inside `dir`, under the default name.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_SNAPSHOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn persist(&self, state: &ApplicationState) -> Result<(), StoreError> {
        let payload = serde_json::to_vec_pretty(state)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, &payload)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }

    async fn restore(&self) -> Result<Option<ApplicationState>, StoreError> {
        let payload = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        match serde_json::from_slice(&payload) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                // Malformed snapshots are treated exactly like absent ones.
                warn!(
                    path = %self.path.display(),
                    "ignoring unparsable snapshot: {e}"
                );
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }
}
