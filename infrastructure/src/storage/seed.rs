//! Demo data for a freshly started store

use chrono::{DateTime, Duration, Utc};
use sanctuary_application::{MinistryRepositories, StorageError};
use sanctuary_domain::{
    EventFields, PrayerRequestFields, ResourceFields, ResourceKind, SermonFields, TaskFields,
    TaskPriority, TaskStatus, TeamMemberFields,
};
use tracing::info;

/// Populate every collection with a small demo congregation.
///
/// Dates are relative to `now` so the fixture always has upcoming events
/// and recent sermons.
pub async fn seed_fixture(
    repos: &MinistryRepositories,
    now: DateTime<Utc>,
) -> Result<(), StorageError> {
    let sunday = now + Duration::days(3);
    let today = now.date_naive();

    for event in [
        EventFields::new("Sunday Worship", sunday)
            .with_location("Main Sanctuary")
            .with_end(sunday + Duration::minutes(90)),
        EventFields::new("Youth Night", now + Duration::days(5))
            .with_location("Fellowship Hall")
            .with_description("Games, worship and a short study"),
        EventFields::new("Community Food Drive", now + Duration::days(12))
            .with_location("Parking Lot"),
    ] {
        repos.events.insert(event, now).await?;
    }

    for request in [
        PrayerRequestFields::new("Recovery after surgery", "Martha")
            .with_details("Knee replacement on Tuesday"),
        PrayerRequestFields::new("Guidance for a new job", "Thomas").private(),
        PrayerRequestFields::new("Safe travels for the mission team", "Lydia").answered(),
    ] {
        repos.prayer_requests.insert(request, now).await?;
    }

    for task in [
        TaskFields::new("Prepare communion elements")
            .assigned_to("Phoebe")
            .due(sunday.date_naive())
            .with_priority(TaskPriority::High),
        TaskFields::new("Update the welcome brochure")
            .assigned_to("Barnabas")
            .with_status(TaskStatus::InProgress),
        TaskFields::new("Replace hallway light bulbs").with_status(TaskStatus::Done),
    ] {
        repos.tasks.insert(task, now).await?;
    }

    for sermon in [
        SermonFields::new("The Good Shepherd", "Pastor Andrew", today - Duration::days(4))
            .with_scripture("John 10:11-18")
            .in_series("I Am"),
        SermonFields::new("Bread of Life", "Pastor Andrew", today - Duration::days(11))
            .with_scripture("John 6:35")
            .in_series("I Am"),
    ] {
        repos.sermons.insert(sermon, now).await?;
    }

    for member in [
        TeamMemberFields::new("Andrew", "Lead Pastor")
            .with_email("andrew@example.org")
            .in_ministry("Preaching"),
        TeamMemberFields::new("Phoebe", "Deacon").in_ministry("Hospitality"),
        TeamMemberFields::new("Barnabas", "Volunteer Coordinator")
            .with_email("barnabas@example.org"),
    ] {
        repos.team_members.insert(member, now).await?;
    }

    for resource in [
        ResourceFields::new("Bible reading plan", "https://www.bible.com/reading-plans")
            .of_kind(ResourceKind::Document)
            .tagged(&["discipleship"]),
        ResourceFields::new("Worship set recordings", "https://example.org/worship")
            .of_kind(ResourceKind::Audio)
            .tagged(&["music", "worship"]),
    ] {
        repos.resources.insert(resource, now).await?;
    }

    info!("Seeded demo ministry data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::in_memory_repositories;
    use sanctuary_domain::RecordFields;

    #[tokio::test]
    async fn test_seed_fills_every_collection() {
        let repos = in_memory_repositories();

        seed_fixture(&repos, Utc::now()).await.unwrap();

        assert_eq!(repos.events.count().await.unwrap(), 3);
        assert_eq!(repos.prayer_requests.count().await.unwrap(), 3);
        assert_eq!(repos.tasks.count().await.unwrap(), 3);
        assert_eq!(repos.sermons.count().await.unwrap(), 2);
        assert_eq!(repos.team_members.count().await.unwrap(), 3);
        assert_eq!(repos.resources.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seeded_records_are_valid() {
        let repos = in_memory_repositories();
        let now = Utc::now();
        seed_fixture(&repos, now).await.unwrap();

        for event in repos.events.list().await.unwrap() {
            event.fields.validate().unwrap();
            assert!(event.fields.is_upcoming(now));
        }
        for request in repos.prayer_requests.list().await.unwrap() {
            request.fields.validate().unwrap();
        }
        for task in repos.tasks.list().await.unwrap() {
            task.fields.validate().unwrap();
        }
        for sermon in repos.sermons.list().await.unwrap() {
            sermon.fields.validate().unwrap();
        }
        for member in repos.team_members.list().await.unwrap() {
            member.fields.validate().unwrap();
        }
        for resource in repos.resources.list().await.unwrap() {
            resource.fields.validate().unwrap();
        }
    }
}
