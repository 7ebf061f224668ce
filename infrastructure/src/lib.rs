//! Infrastructure layer for sanctuary
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the upstream HTTP clients, the in-memory
//! record store, and configuration file loading.

pub mod bible_api;
pub mod config;
pub mod http_client;
pub mod inference;
pub mod storage;

// Re-export commonly used types
pub use bible_api::{BibleApiClient, DEFAULT_BIBLE_API_URL};
pub use config::{
    ConfigLoader, ConfigValidationError, FileApologeticsConfig, FileBibleApiConfig, FileConfig,
    FileInferenceConfig, FileLoggingConfig, FileServerConfig, FileStorageConfig,
};
pub use http_client::{USER_AGENT, build_http_client};
pub use inference::{
    Credential, DEFAULT_INFERENCE_URL, DEFAULT_MODEL, DEFAULT_TOKEN_ENV, GenerationParameters,
    HuggingFaceInferenceClient,
};
pub use storage::{InMemoryRepository, in_memory_repositories, seed_fixture};
