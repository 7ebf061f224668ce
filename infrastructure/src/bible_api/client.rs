//! bible-api.com client

use async_trait::async_trait;
use sanctuary_application::VerseLookupPort;
use sanctuary_domain::LookupError;
use sanctuary_domain::core::string::encode_uri_component;
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_BIBLE_API_URL: &str = "https://bible-api.com";

/// The only part of the bible-api.com payload we read.
#[derive(Debug, Deserialize)]
struct VersePayload {
    text: Option<String>,
}

/// Looks up verse text on bible-api.com (or a compatible service).
pub struct BibleApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BibleApiClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, DEFAULT_BIBLE_API_URL)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn verse_url(&self, reference: &str) -> String {
        format!("{}/{}", self.base_url, encode_uri_component(reference))
    }

    async fn lookup(&self, reference: &str) -> Result<String, LookupError> {
        let url = self.verse_url(reference);
        debug!("Fetching verse from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        // bible-api.com answers unknown references with a 404 and a JSON
        // `{"error": ...}` body, so the body is decoded regardless of status.
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        interpret_verse_body(reference, &body)
    }
}

/// Map a verse service body onto the lookup outcome.
fn interpret_verse_body(reference: &str, body: &str) -> Result<String, LookupError> {
    let payload: VersePayload =
        serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;

    match payload.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LookupError::NotFound {
            reference: reference.to_string(),
        }),
    }
}

#[async_trait]
impl VerseLookupPort for BibleApiClient {
    async fn fetch_verse(&self, reference: &str) -> Result<String, LookupError> {
        let outcome = self.lookup(reference).await;
        if let Err(e) = &outcome {
            warn!("Bible-API lookup for {:?} failed: {}", reference, e);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    /// Serve a fake verse API on a loopback port and return its base URL.
    async fn spawn_verse_service() -> String {
        async fn verse(Path(reference): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
            match reference.as_str() {
                "John 3:16" => (
                    StatusCode::OK,
                    Json(json!({
                        "reference": "John 3:16",
                        "text": "For God so loved the world...\n",
                        "translation_id": "web"
                    })),
                ),
                _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))),
            }
        }

        let app = Router::new()
            .route("/:reference", get(verse))
            .route("/broken/:reference", get(|| async { "<html>oops</html>" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_verse_url_encodes_reference() {
        let client =
            BibleApiClient::with_base_url(reqwest::Client::new(), "https://bible-api.com/");
        assert_eq!(
            client.verse_url("John 3:16"),
            "https://bible-api.com/John%203%3A16"
        );
    }

    #[test]
    fn test_interpret_missing_text_is_not_found() {
        let err = interpret_verse_body("Hezekiah 1:1", r#"{"error":"not found"}"#).unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                reference: "Hezekiah 1:1".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_non_json_is_decode_error() {
        assert!(matches!(
            interpret_verse_body("John 3:16", "<html>"),
            Err(LookupError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_known_verse() {
        let base = spawn_verse_service().await;
        let client = BibleApiClient::with_base_url(reqwest::Client::new(), base);

        let text = client.fetch_verse("John 3:16").await.unwrap();

        assert!(text.starts_with("For God so loved the world"));
    }

    #[tokio::test]
    async fn test_fetch_unknown_verse_is_not_found() {
        let base = spawn_verse_service().await;
        let client = BibleApiClient::with_base_url(reqwest::Client::new(), base);

        let err = client.fetch_verse("Hezekiah 1:1").await.unwrap_err();

        assert!(matches!(err, LookupError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_non_json_body_is_decode_error() {
        let base = spawn_verse_service().await;
        let client =
            BibleApiClient::with_base_url(reqwest::Client::new(), format!("{}/broken", base));

        let err = client.fetch_verse("John 3:16").await.unwrap_err();

        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_absorbed() {
        // Reserve a port, then close it so the connection is refused
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            BibleApiClient::with_base_url(reqwest::Client::new(), format!("http://{}", addr));
        let err = client.fetch_verse("John 3:16").await.unwrap_err();

        assert!(matches!(err, LookupError::Transport(_)));
    }
}
