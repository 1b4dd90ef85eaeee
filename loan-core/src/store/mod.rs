pub mod repository;

pub use repository::{SnapshotStore, StoreError};
