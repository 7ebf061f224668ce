//! Generative answer port
//!
//! Defines the interface for asking a text-generation endpoint for a free-form
//! answer.

use async_trait::async_trait;
use sanctuary_domain::LookupError;

/// Source of generated answers.
///
/// A successful call carries non-empty text. A response without usable text
/// is [`LookupError::EmptyGeneration`]; everything else that goes wrong is one
/// of the transport/status/decode variants.
#[async_trait]
pub trait GenerativeAnswerPort: Send + Sync {
    /// Generate an answer to `question`.
    async fn generate(&self, question: &str) -> Result<String, LookupError>;
}
