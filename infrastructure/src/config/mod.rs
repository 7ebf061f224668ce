//! Configuration file loading for sanctuary
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SANCTUARY_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./sanctuary.toml` or `./.sanctuary.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sanctuary/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileApologeticsConfig, FileBibleApiConfig, FileConfig,
    FileInferenceConfig, FileLoggingConfig, FileServerConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
