use async_trait::async_trait;
use thiserror::Error;

use crate::models::ApplicationState;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Durable storage for the application snapshot.
///
/// One logical record: persisting overwrites the previous snapshot in full,
/// restoring returns the latest one. A backend must treat a malformed stored
/// payload the same as an absent one — `restore` returns `Ok(None)` for
/// both, never an error the caller has to distinguish.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn persist(&self, state: &ApplicationState) -> Result<(), StoreError>;

    async fn restore(&self) -> Result<Option<ApplicationState>, StoreError>;

    async fn clear(&self) -> Result<(), StoreError>;
}
