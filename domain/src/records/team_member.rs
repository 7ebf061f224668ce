//! Ministry team roster.

use super::record::{Record, RecordFields, RecordKind, require_text};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

pub type TeamMember = Record<TeamMemberFields>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberFields {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Ministry area (worship, youth, outreach, ...)
    #[serde(default)]
    pub ministry: Option<String>,
}

impl TeamMemberFields {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: None,
            phone: None,
            ministry: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn in_ministry(mut self, ministry: impl Into<String>) -> Self {
        self.ministry = Some(ministry.into());
        self
    }
}

impl RecordFields for TeamMemberFields {
    const KIND: RecordKind = RecordKind::TeamMember;

    fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name)?;
        require_text("role", &self.role)?;
        if let Some(email) = &self.email
            && !email.contains('@')
        {
            return Err(DomainError::validation("email", "must contain '@'"));
        }
        Ok(())
    }
}
