//! Prayer requests submitted by members.

use super::record::{Record, RecordFields, RecordKind, require_text};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

pub type PrayerRequest = Record<PrayerRequestFields>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrayerStatus {
    #[default]
    Active,
    Answered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequestFields {
    pub title: String,
    #[serde(default)]
    pub details: Option<String>,
    pub requested_by: String,
    #[serde(default)]
    pub status: PrayerStatus,
    /// Hidden from the public prayer wall
    #[serde(default)]
    pub is_private: bool,
}

impl PrayerRequestFields {
    pub fn new(title: impl Into<String>, requested_by: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            details: None,
            requested_by: requested_by.into(),
            status: PrayerStatus::Active,
            is_private: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn answered(mut self) -> Self {
        self.status = PrayerStatus::Answered;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == PrayerStatus::Active
    }
}

impl RecordFields for PrayerRequestFields {
    const KIND: RecordKind = RecordKind::PrayerRequest;

    fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        require_text("requestedBy", &self.requested_by)
    }
}
