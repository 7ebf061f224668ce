//! Shared study and teaching resources.

use super::record::{Record, RecordFields, RecordKind, require_text};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

pub type Resource = Record<ResourceFields>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Document,
    Video,
    Audio,
    #[default]
    Link,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFields {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kind: ResourceKind,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ResourceFields {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
            kind: ResourceKind::default(),
            tags: Vec::new(),
        }
    }

    pub fn of_kind(mut self, kind: ResourceKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn tagged(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

impl RecordFields for ResourceFields {
    const KIND: RecordKind = RecordKind::Resource;

    fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        require_text("url", &self.url)?;
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(DomainError::validation("url", "must be an http(s) URL"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_scheme_checked() {
        assert!(ResourceFields::new("Catechism", "https://example.org/c.pdf").validate().is_ok());
        assert!(ResourceFields::new("Catechism", "ftp://example.org/c.pdf").validate().is_err());
    }

    #[test]
    fn test_kind_defaults_to_link() {
        let fields: ResourceFields =
            serde_json::from_str(r#"{"title":"Hymnal","url":"https://example.org"}"#).unwrap();
        assert_eq!(fields.kind, ResourceKind::Link);
        assert!(fields.tags.is_empty());
    }
}
