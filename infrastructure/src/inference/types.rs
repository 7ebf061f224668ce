//! Wire types for the inference endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Sampling parameters sent with every request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 256,
            temperature: 0.7,
        }
    }
}

/// Request body: `{"inputs": ..., "parameters": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: &'a GenerationParameters,
}

/// One generation result
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedText {
    #[serde(default)]
    pub generated_text: Option<String>,
}

impl GeneratedText {
    /// Read `generated_text` from an object; any other value carries no text.
    fn from_value(value: Value) -> Self {
        let generated_text = match value {
            Value::Object(map) => map
                .get("generated_text")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        };
        Self { generated_text }
    }
}

/// The response shapes seen in the wild.
///
/// The shape is decided by the JSON kind: an array is a `Batch`, an object
/// is a `Single`, anything else is `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResponse {
    /// `[{"generated_text": "..."}, ...]`
    Batch(Vec<GeneratedText>),
    /// `{"generated_text": "..."}`
    Single(GeneratedText),
    /// Unrecognized shape (e.g. a bare string or a number)
    Other(Value),
}

impl From<Value> for InferenceResponse {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => InferenceResponse::Batch(
                items.into_iter().map(GeneratedText::from_value).collect(),
            ),
            Value::Object(_) => InferenceResponse::Single(GeneratedText::from_value(value)),
            other => InferenceResponse::Other(other),
        }
    }
}

impl<'de> Deserialize<'de> for InferenceResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(InferenceResponse::from)
    }
}

impl InferenceResponse {
    /// The usable generated text, if the response carries any.
    ///
    /// Only the first element of a batch is considered. Blank text counts as
    /// no text.
    pub fn into_text(self) -> Option<String> {
        let text = match self {
            InferenceResponse::Batch(items) => items.into_iter().next()?.generated_text,
            InferenceResponse::Single(item) => item.generated_text,
            InferenceResponse::Other(_) => None,
        }?;
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
