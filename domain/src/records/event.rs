//! Church events (services, studies, outreach days).

use super::record::{Record, RecordFields, RecordKind, require_text};
use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Event = Record<EventFields>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFields {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl EventFields {
    pub fn new(title: impl Into<String>, starts_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            location: None,
            starts_at,
            ends_at: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_end(mut self, ends_at: DateTime<Utc>) -> Self {
        self.ends_at = Some(ends_at);
        self
    }

    /// Returns `true` if the event has not started yet at `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.starts_at >= now
    }
}

impl RecordFields for EventFields {
    const KIND: RecordKind = RecordKind::Event;

    fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        if let Some(ends_at) = self.ends_at
            && ends_at < self.starts_at
        {
            return Err(DomainError::validation(
                "endsAt",
                "must not be earlier than startsAt",
            ));
        }
        Ok(())
    }
}
