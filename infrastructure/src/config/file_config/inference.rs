//! Text-generation endpoint configuration from TOML (`[inference]` section)

use crate::inference::{
    Credential, DEFAULT_INFERENCE_URL, DEFAULT_MODEL, DEFAULT_TOKEN_ENV, GenerationParameters,
    HuggingFaceInferenceClient,
};
use serde::{Deserialize, Serialize};

/// Raw inference endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInferenceConfig {
    /// Base URL; the model id is appended as the final path
    pub base_url: String,
    /// Model id, e.g. `google/flan-t5-large`
    pub model: String,
    /// Environment variable holding the bearer token (read on every call)
    pub token_env: String,
    pub max_new_tokens: u32,
    pub temperature: f64,
}

impl Default for FileInferenceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INFERENCE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            max_new_tokens: 256,
            temperature: 0.7,
        }
    }
}

impl FileInferenceConfig {
    pub fn parameters(&self) -> GenerationParameters {
        GenerationParameters {
            max_new_tokens: self.max_new_tokens,
            temperature: self.temperature,
        }
    }

    /// Build the inference adapter on top of a shared HTTP client.
    pub fn build_client(&self, http: reqwest::Client) -> HuggingFaceInferenceClient {
        HuggingFaceInferenceClient::new(http)
            .with_base_url(&self.base_url)
            .with_model(&self.model)
            .with_credential(Credential::FromEnv(self.token_env.clone()))
            .with_parameters(self.parameters())
    }
}
