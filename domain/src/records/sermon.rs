//! Sermon archive entries.

use super::record::{Record, RecordFields, RecordKind, require_text};
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type Sermon = Record<SermonFields>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SermonFields {
    pub title: String,
    pub preacher: String,
    pub preached_on: NaiveDate,
    #[serde(default)]
    pub scripture: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SermonFields {
    pub fn new(
        title: impl Into<String>,
        preacher: impl Into<String>,
        preached_on: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            preacher: preacher.into(),
            preached_on,
            scripture: None,
            series: None,
            notes: None,
        }
    }

    pub fn with_scripture(mut self, scripture: impl Into<String>) -> Self {
        self.scripture = Some(scripture.into());
        self
    }

    pub fn in_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }
}

impl RecordFields for SermonFields {
    const KIND: RecordKind = RecordKind::Sermon;

    fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        require_text("preacher", &self.preacher)
    }
}
