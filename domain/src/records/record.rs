//! Record envelope and the per-kind field contract.

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store, unique within one collection.
pub type RecordId = u64;

/// The six record collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Event,
    PrayerRequest,
    Task,
    Sermon,
    TeamMember,
    Resource,
}

impl RecordKind {
    pub const ALL: [RecordKind; 6] = [
        RecordKind::Event,
        RecordKind::PrayerRequest,
        RecordKind::Task,
        RecordKind::Sermon,
        RecordKind::TeamMember,
        RecordKind::Resource,
    ];

    /// URL-safe collection name
    pub fn slug(&self) -> &'static str {
        match self {
            RecordKind::Event => "events",
            RecordKind::PrayerRequest => "prayer-requests",
            RecordKind::Task => "tasks",
            RecordKind::Sermon => "sermons",
            RecordKind::TeamMember => "team-members",
            RecordKind::Resource => "resources",
        }
    }

    /// Human-readable singular name
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Event => "Event",
            RecordKind::PrayerRequest => "Prayer request",
            RecordKind::Task => "Task",
            RecordKind::Sermon => "Sermon",
            RecordKind::TeamMember => "Team member",
            RecordKind::Resource => "Resource",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Client-editable fields of one record kind.
pub trait RecordFields:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: RecordKind;

    /// Check required fields and cross-field constraints.
    fn validate(&self) -> Result<(), DomainError>;
}

/// A stored record: store-assigned identity plus the kind's fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<F> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: F,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<F: RecordFields> Record<F> {
    pub fn new(id: RecordId, fields: F, now: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field, keeping `id` and `created_at`.
    pub fn replace_fields(&mut self, fields: F, now: DateTime<Utc>) {
        self.fields = fields;
        self.updated_at = now;
    }

    pub fn kind(&self) -> RecordKind {
        F::KIND
    }
}

/// Reject empty or whitespace-only required text.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be blank"));
    }
    Ok(())
}
