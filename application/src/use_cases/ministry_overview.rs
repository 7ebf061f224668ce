//! Ministry Overview use case.
//!
//! Builds the dashboard summary: how many records each collection holds,
//! how much is still outstanding, and what is coming up next.

use crate::ports::record_repository::{MinistryRepositories, StorageError};
use chrono::{DateTime, Utc};
use sanctuary_domain::{Event, RecordKind};
use serde::Serialize;

/// Number of upcoming events included in the overview.
pub const UPCOMING_EVENT_LIMIT: usize = 5;

/// Record count for one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindCount {
    pub kind: RecordKind,
    pub count: usize,
}

/// Dashboard summary across all collections
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryOverview {
    pub counts: Vec<KindCount>,
    pub active_prayer_requests: usize,
    pub open_tasks: usize,
    /// Soonest first, at most [`UPCOMING_EVENT_LIMIT`]
    pub upcoming_events: Vec<Event>,
}

impl MinistryOverview {
    pub fn count_of(&self, kind: RecordKind) -> usize {
        self.counts
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

/// Use case for the dashboard summary
#[derive(Clone)]
pub struct MinistryOverviewUseCase {
    repositories: MinistryRepositories,
}

impl MinistryOverviewUseCase {
    pub fn new(repositories: MinistryRepositories) -> Self {
        Self { repositories }
    }

    /// Summarize every collection as of `now`.
    pub async fn summary(&self, now: DateTime<Utc>) -> Result<MinistryOverview, StorageError> {
        let repos = &self.repositories;

        let events = repos.events.list().await?;
        let prayer_requests = repos.prayer_requests.list().await?;
        let tasks = repos.tasks.list().await?;

        let counts = vec![
            KindCount {
                kind: RecordKind::Event,
                count: events.len(),
            },
            KindCount {
                kind: RecordKind::PrayerRequest,
                count: prayer_requests.len(),
            },
            KindCount {
                kind: RecordKind::Task,
                count: tasks.len(),
            },
            KindCount {
                kind: RecordKind::Sermon,
                count: repos.sermons.count().await?,
            },
            KindCount {
                kind: RecordKind::TeamMember,
                count: repos.team_members.count().await?,
            },
            KindCount {
                kind: RecordKind::Resource,
                count: repos.resources.count().await?,
            },
        ];

        let mut upcoming_events: Vec<Event> = events
            .into_iter()
            .filter(|e| e.fields.is_upcoming(now))
            .collect();
        upcoming_events.sort_by_key(|e| e.fields.starts_at);
        upcoming_events.truncate(UPCOMING_EVENT_LIMIT);

        Ok(MinistryOverview {
            counts,
            active_prayer_requests: prayer_requests
                .iter()
                .filter(|p| p.fields.is_active())
                .count(),
            open_tasks: tasks.iter().filter(|t| t.fields.is_open()).count(),
            upcoming_events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::record_repository::RecordRepository;
    use async_trait::async_trait;
    use chrono::Duration;
    use sanctuary_domain::{
        EventFields, PrayerRequestFields, Record, RecordFields, RecordId, ResourceFields,
        SermonFields, TaskFields, TaskStatus, TeamMemberFields,
    };
    use std::sync::{Arc, Mutex};

    struct MockRepository<F> {
        records: Mutex<Vec<Record<F>>>,
    }

    impl<F> MockRepository<F> {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl<F: RecordFields> RecordRepository<F> for MockRepository<F> {
        async fn list(&self) -> Result<Vec<Record<F>>, StorageError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn get(&self, id: RecordId) -> Result<Option<Record<F>>, StorageError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned())
        }

        async fn insert(&self, fields: F, now: DateTime<Utc>) -> Result<Record<F>, StorageError> {
            let mut records = self.records.lock().unwrap();
            let record = Record::new(records.len() as RecordId + 1, fields, now);
            records.push(record.clone());
            Ok(record)
        }

        async fn update(
            &self,
            _id: RecordId,
            _fields: F,
            _now: DateTime<Utc>,
        ) -> Result<Option<Record<F>>, StorageError> {
            Ok(None)
        }

        async fn delete(&self, _id: RecordId) -> Result<bool, StorageError> {
            Ok(false)
        }
    }

    fn repositories() -> MinistryRepositories {
        MinistryRepositories {
            events: Arc::new(MockRepository::<EventFields>::new()),
            prayer_requests: Arc::new(MockRepository::<PrayerRequestFields>::new()),
            tasks: Arc::new(MockRepository::<TaskFields>::new()),
            sermons: Arc::new(MockRepository::<SermonFields>::new()),
            team_members: Arc::new(MockRepository::<TeamMemberFields>::new()),
            resources: Arc::new(MockRepository::<ResourceFields>::new()),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_800_000_000, 0).unwrap()
    }

    #[tokio::test]
    async fn test_empty_store() {
        let overview = MinistryOverviewUseCase::new(repositories())
            .summary(now())
            .await
            .unwrap();

        assert_eq!(overview.counts.len(), RecordKind::ALL.len());
        assert!(overview.counts.iter().all(|c| c.count == 0));
        assert!(overview.upcoming_events.is_empty());
    }

    #[tokio::test]
    async fn test_counts_and_outstanding_work() {
        let repos = repositories();
        let now = now();
        repos
            .prayer_requests
            .insert(PrayerRequestFields::new("Healing", "Anna"), now)
            .await
            .unwrap();
        repos
            .prayer_requests
            .insert(PrayerRequestFields::new("New job", "Simeon").answered(), now)
            .await
            .unwrap();
        repos.tasks.insert(TaskFields::new("Open"), now).await.unwrap();
        repos
            .tasks
            .insert(TaskFields::new("Closed").with_status(TaskStatus::Done), now)
            .await
            .unwrap();

        let overview = MinistryOverviewUseCase::new(repos).summary(now).await.unwrap();

        assert_eq!(overview.count_of(RecordKind::PrayerRequest), 2);
        assert_eq!(overview.count_of(RecordKind::Task), 2);
        assert_eq!(overview.active_prayer_requests, 1);
        assert_eq!(overview.open_tasks, 1);
    }

    #[tokio::test]
    async fn test_upcoming_events_sorted_and_limited() {
        let repos = repositories();
        let now = now();
        repos
            .events
            .insert(EventFields::new("Past", now - Duration::days(1)), now)
            .await
            .unwrap();
        for day in (1..=7).rev() {
            repos
                .events
                .insert(
                    EventFields::new(format!("Day {}", day), now + Duration::days(day)),
                    now,
                )
                .await
                .unwrap();
        }

        let overview = MinistryOverviewUseCase::new(repos).summary(now).await.unwrap();

        assert_eq!(overview.count_of(RecordKind::Event), 8);
        assert_eq!(overview.upcoming_events.len(), UPCOMING_EVENT_LIMIT);
        let titles: Vec<_> = overview
            .upcoming_events
            .iter()
            .map(|e| e.fields.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Day 1", "Day 2", "Day 3", "Day 4", "Day 5"]);
    }
}
