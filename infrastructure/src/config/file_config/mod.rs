//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Each section lives in its own module and converts itself into the
//! application/domain types it configures.

mod apologetics;
mod bible_api;
mod inference;
mod logging;
mod server;
mod storage;

pub use apologetics::FileApologeticsConfig;
pub use bible_api::FileBibleApiConfig;
pub use inference::FileInferenceConfig;
pub use logging::FileLoggingConfig;
pub use server::FileServerConfig;
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    ZeroValue(&'static str),

    #[error("{0} cannot be empty")]
    EmptyValue(&'static str),

    #[error("inference.temperature must be within 0.0..=2.0, got {0}")]
    TemperatureOutOfRange(f64),

    #[error("apologetics.reference_pattern is invalid: {0}")]
    InvalidPattern(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Aggregator deadlines and reference detection
    pub apologetics: FileApologeticsConfig,
    /// Verse lookup service
    pub bible_api: FileBibleApiConfig,
    /// Text-generation endpoint
    pub inference: FileInferenceConfig,
    /// Record store settings
    pub storage: FileStorageConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.server.bind.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("server.bind"));
        }
        if self.apologetics.lookup_timeout_seconds == 0 {
            issues.push(ConfigValidationError::ZeroValue(
                "apologetics.lookup_timeout_seconds",
            ));
        }
        if let Err(e) = self.apologetics.classifier() {
            issues.push(ConfigValidationError::InvalidPattern(e.to_string()));
        }
        if self.bible_api.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("bible_api.base_url"));
        }
        if self.inference.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("inference.base_url"));
        }
        if self.inference.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyValue("inference.model"));
        }
        if self.inference.max_new_tokens == 0 {
            issues.push(ConfigValidationError::ZeroValue("inference.max_new_tokens"));
        }
        if !(0.0..=2.0).contains(&self.inference.temperature) {
            issues.push(ConfigValidationError::TemperatureOutOfRange(
                self.inference.temperature,
            ));
        }

        issues
    }
}
