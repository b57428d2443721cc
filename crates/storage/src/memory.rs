//! In-memory storage backend.

use std::collections::HashMap;

use preptrack_core::{ProgressRecord, UserId};

use super::Result;
use crate::ProgressStore;

/// HashMap-backed storage. Useful in tests and for embedding the
/// aggregator without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: HashMap<UserId, ProgressRecord>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProgressStore for MemoryStorage {
    async fn load_record(&self, user_id: UserId) -> Result<Option<ProgressRecord>> {
        Ok(self.records.get(&user_id).cloned())
    }

    async fn save_record(&mut self, record: &ProgressRecord) -> Result<()> {
        self.records.insert(record.user_id, record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_returns_saved_record() {
        let mut storage = MemoryStorage::new();
        let user = UserId::new();

        assert!(storage.load_record(user).await.unwrap().is_none());

        let record = ProgressRecord::new(user);
        storage.save_record(&record).await.unwrap();

        let loaded = storage.load_record(user).await.unwrap().unwrap();
        assert_eq!(loaded.user_id, user);
    }
}
