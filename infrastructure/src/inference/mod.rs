//! Generative answer adapter for the Hugging Face inference API.
//!
//! Implements [`GenerativeAnswerPort`](sanctuary_application::GenerativeAnswerPort)
//! by POSTing `{inputs, parameters}` to `{base_url}/{model}`.
//!
//! Providers disagree on the response shape: text-generation models return
//! `[{"generated_text": ...}]`, some others return a bare object. Both are
//! decoded explicitly by [`types::InferenceResponse`].

mod client;
mod credential;
mod types;

pub use client::{DEFAULT_INFERENCE_URL, DEFAULT_MODEL, HuggingFaceInferenceClient};
pub use credential::{Credential, DEFAULT_TOKEN_ENV};
pub use types::{GenerationParameters, InferenceRequest, InferenceResponse};
