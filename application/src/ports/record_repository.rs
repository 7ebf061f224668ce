//! Record repository port
//!
//! Storage contract for the ministry record collections. The bundled adapter
//! keeps everything in memory; a persistent store only has to implement
//! [`RecordRepository`] for each field type.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sanctuary_domain::{
    EventFields, PrayerRequestFields, Record, RecordFields, RecordId, ResourceFields,
    SermonFields, TaskFields, TeamMemberFields,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Storage error: {0}")]
pub struct StorageError(pub String);

/// CRUD access to one record collection.
///
/// Ids are assigned by the repository, increase monotonically and are never
/// reused within a collection.
#[async_trait]
pub trait RecordRepository<F: RecordFields>: Send + Sync {
    /// All records, ordered by id
    async fn list(&self) -> Result<Vec<Record<F>>, StorageError>;

    async fn get(&self, id: RecordId) -> Result<Option<Record<F>>, StorageError>;

    /// Store a new record stamped with `now` and return it with its id
    async fn insert(&self, fields: F, now: DateTime<Utc>) -> Result<Record<F>, StorageError>;

    /// Replace the fields of an existing record; `None` if the id is unknown
    async fn update(
        &self,
        id: RecordId,
        fields: F,
        now: DateTime<Utc>,
    ) -> Result<Option<Record<F>>, StorageError>;

    /// Remove a record; `false` if the id is unknown
    async fn delete(&self, id: RecordId) -> Result<bool, StorageError>;

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.list().await?.len())
    }
}

/// One repository per record collection.
#[derive(Clone)]
pub struct MinistryRepositories {
    pub events: Arc<dyn RecordRepository<EventFields>>,
    pub prayer_requests: Arc<dyn RecordRepository<PrayerRequestFields>>,
    pub tasks: Arc<dyn RecordRepository<TaskFields>>,
    pub sermons: Arc<dyn RecordRepository<SermonFields>>,
    pub team_members: Arc<dyn RecordRepository<TeamMemberFields>>,
    pub resources: Arc<dyn RecordRepository<ResourceFields>>,
}

/// Typed lookup of the repository for field type `F`.
pub trait RepositoryFor<F: RecordFields> {
    fn repository(&self) -> Arc<dyn RecordRepository<F>>;
}

macro_rules! repository_for {
    ($fields:ty, $field:ident) => {
        impl RepositoryFor<$fields> for MinistryRepositories {
            fn repository(&self) -> Arc<dyn RecordRepository<$fields>> {
                self.$field.clone()
            }
        }
    };
}

repository_for!(EventFields, events);
repository_for!(PrayerRequestFields, prayer_requests);
repository_for!(TaskFields, tasks);
repository_for!(SermonFields, sermons);
repository_for!(TeamMemberFields, team_members);
repository_for!(ResourceFields, resources);
