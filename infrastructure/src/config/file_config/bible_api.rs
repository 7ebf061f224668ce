//! Verse service configuration from TOML (`[bible_api]` section)

use crate::bible_api::{BibleApiClient, DEFAULT_BIBLE_API_URL};
use serde::{Deserialize, Serialize};

/// Raw verse lookup configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBibleApiConfig {
    /// Base URL; the encoded reference is appended as a path segment
    pub base_url: String,
}

impl Default for FileBibleApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BIBLE_API_URL.to_string(),
        }
    }
}

impl FileBibleApiConfig {
    pub fn build_client(&self, http: reqwest::Client) -> BibleApiClient {
        BibleApiClient::with_base_url(http, &self.base_url)
    }
}
