//! Record store configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Load the demo fixture into the in-memory store at startup
    pub seed: bool,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}
