//! Hugging Face inference client

use super::credential::Credential;
use super::types::{GenerationParameters, InferenceRequest, InferenceResponse};
use async_trait::async_trait;
use sanctuary_application::GenerativeAnswerPort;
use sanctuary_domain::LookupError;
use sanctuary_domain::core::string::truncate;
use tracing::{debug, warn};

pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MODEL: &str = "google/flan-t5-large";

/// Maximum bytes of an error body kept in logs and errors.
const MAX_ERROR_BODY: usize = 500;

/// Generates answers through a hosted text-generation model.
pub struct HuggingFaceInferenceClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    credential: Credential,
    parameters: GenerationParameters,
}

impl HuggingFaceInferenceClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_INFERENCE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            credential: Credential::default(),
            parameters: GenerationParameters::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }

    async fn request(&self, question: &str) -> Result<String, LookupError> {
        let endpoint = self.endpoint();
        debug!("Requesting generation from {}", endpoint);

        let mut request = self.client.post(&endpoint).json(&InferenceRequest {
            inputs: question,
            parameters: &self.parameters,
        });
        match self.credential.resolve() {
            Some(token) => request = request.bearer_auth(token),
            None => warn!("No inference token configured; sending unauthenticated request"),
        }

        let response = request
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let decoded: InferenceResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        decoded.into_text().ok_or(LookupError::EmptyGeneration)
    }
}

#[async_trait]
impl GenerativeAnswerPort for HuggingFaceInferenceClient {
    async fn generate(&self, question: &str) -> Result<String, LookupError> {
        let outcome = self.request(question).await;
        if let Err(e) = &outcome {
            warn!("Inference request to {} failed: {}", self.model, e);
        }
        outcome
    }
}
