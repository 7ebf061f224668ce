//! Aggregator configuration from TOML (`[apologetics]` section)

use sanctuary_application::LookupPolicy;
use sanctuary_domain::{DomainError, ScriptureReferenceClassifier};
use serde::{Deserialize, Serialize};

/// Raw apologetics aggregator configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApologeticsConfig {
    /// Deadline for each upstream lookup, in seconds
    pub lookup_timeout_seconds: u64,
    /// Override for the reference-detection regex
    pub reference_pattern: Option<String>,
}

impl Default for FileApologeticsConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_seconds: 10,
            reference_pattern: None,
        }
    }
}

impl FileApologeticsConfig {
    pub fn lookup_policy(&self) -> LookupPolicy {
        LookupPolicy::with_timeout_seconds(self.lookup_timeout_seconds)
    }

    /// Build the classifier, falling back to the built-in pattern when unset.
    pub fn classifier(&self) -> Result<ScriptureReferenceClassifier, DomainError> {
        match &self.reference_pattern {
            Some(pattern) => ScriptureReferenceClassifier::with_pattern(pattern),
            None => Ok(ScriptureReferenceClassifier::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = FileApologeticsConfig::default();
        assert_eq!(config.lookup_policy().timeout, Some(Duration::from_secs(10)));
        assert!(
            config
                .classifier()
                .unwrap()
                .is_scripture_reference("John 3:16")
        );
    }

    #[test]
    fn test_custom_pattern() {
        let config = FileApologeticsConfig {
            reference_pattern: Some(r"^(\d )?[A-Za-z ]+\d+:\d+$".to_string()),
            ..Default::default()
        };
        assert!(
            config
                .classifier()
                .unwrap()
                .is_scripture_reference("2 Timothy 3:16")
        );
    }
}
