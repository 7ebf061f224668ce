//! In-memory record repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sanctuary_application::{MinistryRepositories, RecordRepository, StorageError};
use sanctuary_domain::{Record, RecordFields, RecordId};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Process-local store for one record collection.
///
/// Ids start at 1 and come from a counter that only moves forward, so a
/// deleted id is never handed out again.
pub struct InMemoryRepository<F> {
    records: RwLock<BTreeMap<RecordId, Record<F>>>,
    next_id: AtomicU64,
}

impl<F> InMemoryRepository<F> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl<F> Default for InMemoryRepository<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<F: RecordFields> RecordRepository<F> for InMemoryRepository<F> {
    async fn list(&self) -> Result<Vec<Record<F>>, StorageError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get(&self, id: RecordId) -> Result<Option<Record<F>>, StorageError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn insert(&self, fields: F, now: DateTime<Utc>) -> Result<Record<F>, StorageError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = Record::new(id, fields, now);
        self.records.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: RecordId,
        fields: F,
        now: DateTime<Utc>,
    ) -> Result<Option<Record<F>>, StorageError> {
        let mut records = self.records.write().await;
        Ok(records.get_mut(&id).map(|record| {
            record.replace_fields(fields, now);
            record.clone()
        }))
    }

    async fn delete(&self, id: RecordId) -> Result<bool, StorageError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.records.read().await.len())
    }
}

/// Fresh, empty in-memory repositories for every collection.
pub fn in_memory_repositories() -> MinistryRepositories {
    MinistryRepositories {
        events: Arc::new(InMemoryRepository::new()),
        prayer_requests: Arc::new(InMemoryRepository::new()),
        tasks: Arc::new(InMemoryRepository::new()),
        sermons: Arc::new(InMemoryRepository::new()),
        team_members: Arc::new(InMemoryRepository::new()),
        resources: Arc::new(InMemoryRepository::new()),
    }
}
