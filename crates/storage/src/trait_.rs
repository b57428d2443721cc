//! Storage trait abstraction.

use async_trait::async_trait;
use preptrack_core::{ProgressRecord, UserId};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Storage abstraction for progress records.
///
/// Records are partitioned by user id and never shared, so a backend only
/// needs whole-record load and save. Each aggregator operation performs one
/// load, one transition, and one save against this trait.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load a user's record, if one exists yet.
    async fn load_record(&self, user_id: UserId) -> Result<Option<ProgressRecord>>;

    /// Save a record (create or update).
    async fn save_record(&mut self, record: &ProgressRecord) -> Result<()>;
}
