//! Aggregator error taxonomy.

use preptrack_storage::StorageError;

/// Result type for aggregator operations.
pub type Result<T> = std::result::Result<T, ProgressError>;

/// Errors that can occur while recording or reading progress.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// Referenced goal or record does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed input; nothing was persisted
    #[error("invalid input: {0}")]
    Validation(String),

    /// Load or save failure from the external store, propagated unchanged
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
