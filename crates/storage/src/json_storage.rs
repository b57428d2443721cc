//! JSON file storage implementation.
//!
//! Stores one progress record per user as a JSON file under a
//! `records/` directory.

use std::path::{Path, PathBuf};

use preptrack_core::{ProgressRecord, UserId};
use tokio::fs;
use tracing::debug;

use super::{Result, StorageError};
use crate::ProgressStore;

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the `records/` directory
    /// if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("records")).await?;
        Ok(Self { root })
    }

    fn record_path(&self, user_id: UserId) -> PathBuf {
        self.root.join("records").join(format!("{}.json", user_id))
    }
}

#[async_trait::async_trait]
impl ProgressStore for JsonStorage {
    async fn load_record(&self, user_id: UserId) -> Result<Option<ProgressRecord>> {
        read_json(&self.record_path(user_id)).await
    }

    async fn save_record(&mut self, record: &ProgressRecord) -> Result<()> {
        let path = self.record_path(record.user_id);
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json.as_bytes()).await?;
        debug!(user = %record.user_id, "saved progress record");
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::Io(e)),
    }
}
