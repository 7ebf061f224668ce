//! HTTP server for sanctuary
//!
//! Serves the apologetics aggregator and the ministry record collections as
//! a JSON API. Handlers are thin: extract, call a use case, serialize.

mod error;
pub mod routes;

pub use error::ApiError;

use axum::Router;
use sanctuary_application::{AggregateAnswerUseCase, MinistryOverviewUseCase, MinistryRepositories};
use sanctuary_domain::{
    EventFields, PrayerRequestFields, ResourceFields, SermonFields, TaskFields, TeamMemberFields,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub apologetics: AggregateAnswerUseCase,
    pub repositories: MinistryRepositories,
    pub overview: MinistryOverviewUseCase,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(apologetics: AggregateAnswerUseCase, repositories: MinistryRepositories) -> Self {
        Self {
            apologetics,
            overview: MinistryOverviewUseCase::new(repositories.clone()),
            repositories,
            start_time: Instant::now(),
        }
    }
}

/// Build the full API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::apologetics_routes())
        .merge(routes::record_routes::<EventFields>())
        .merge(routes::record_routes::<PrayerRequestFields>())
        .merge(routes::record_routes::<TaskFields>())
        .merge(routes::record_routes::<SermonFields>())
        .merge(routes::record_routes::<TeamMemberFields>())
        .merge(routes::record_routes::<ResourceFields>())
        .merge(routes::overview_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until `shutdown` is cancelled.
pub async fn run(state: AppState, bind: &str, shutdown: CancellationToken) -> std::io::Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::routes::QUESTION_REQUIRED;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use sanctuary_application::{GenerativeAnswerPort, VerseLookupPort};
    use sanctuary_domain::{ANSWER_SEPARATOR, LookupError};
    use sanctuary_infrastructure::in_memory_repositories;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    // ==================== Test Mocks ====================

    struct MockGenerator;

    #[async_trait]
    impl GenerativeAnswerPort for MockGenerator {
        async fn generate(&self, question: &str) -> Result<String, LookupError> {
            Ok(format!("Generated: {}", question))
        }
    }

    struct PanickingGenerator;

    #[async_trait]
    impl GenerativeAnswerPort for PanickingGenerator {
        async fn generate(&self, _question: &str) -> Result<String, LookupError> {
            panic!("adapter bug");
        }
    }

    struct MockVerses;

    #[async_trait]
    impl VerseLookupPort for MockVerses {
        async fn fetch_verse(&self, reference: &str) -> Result<String, LookupError> {
            if reference.starts_with("Hezekiah") {
                return Err(LookupError::NotFound {
                    reference: reference.to_string(),
                });
            }
            Ok("For God so loved the world".to_string())
        }
    }

    fn app_with(generator: Arc<dyn GenerativeAnswerPort>) -> Router {
        let apologetics = AggregateAnswerUseCase::new(generator, Arc::new(MockVerses));
        router(AppState::new(apologetics, in_memory_repositories()))
    }

    fn app() -> Router {
        app_with(Arc::new(MockGenerator))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    // ==================== Apologetics ====================

    #[tokio::test]
    async fn test_apologetics_reference_answer() {
        let (status, body) = send(
            &app(),
            json_request("POST", "/api/apologetics", json!({ "question": "John 3:16" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let answer = body["answer"].as_str().unwrap();
        let parts: Vec<_> = answer.split(ANSWER_SEPARATOR).collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "Generated: John 3:16");
        assert_eq!(parts[1], "Bible-API (John 3:16):\nFor God so loved the world");
        assert!(parts[2].starts_with("Topical Bible: https://www.openbible.info/topics/"));
        assert!(parts[3].starts_with("STEP Bible: https://www.stepbible.org/"));
    }

    #[tokio::test]
    async fn test_apologetics_free_text_skips_verse() {
        let (status, body) = send(
            &app(),
            json_request(
                "POST",
                "/api/apologetics",
                json!({ "question": "Is the resurrection historical?" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let answer = body["answer"].as_str().unwrap();
        assert_eq!(answer.split(ANSWER_SEPARATOR).count(), 3);
        assert!(!answer.contains("Bible-API"));
    }

    #[tokio::test]
    async fn test_apologetics_requires_question() {
        let app = app();
        for body in [json!({}), json!({ "question": "   " }), json!({ "question": null })] {
            let (status, body) = send(&app, json_request("POST", "/api/apologetics", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["message"], QUESTION_REQUIRED);
        }

        let no_body = Request::builder()
            .method("POST")
            .uri("/api/apologetics")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, no_body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_apologetics_task_panic_is_500() {
        let (status, body) = send(
            &app_with(Arc::new(PanickingGenerator)),
            json_request("POST", "/api/apologetics", json!({ "question": "Why?" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to fetch apologetics answer");
    }

    #[tokio::test]
    async fn test_debug_route_defaults_question() {
        let (status, body) = send(&app(), get("/api/debug-apologetics")).await;

        assert_eq!(status, StatusCode::OK);
        let fragments = body.as_array().unwrap();
        assert_eq!(fragments.len(), 4);
        assert_eq!(fragments[0], "Generated: John 3:16");
    }

    #[tokio::test]
    async fn test_debug_route_keeps_failure_sentences() {
        let (_, body) = send(&app(), get("/api/debug-apologetics?question=Hezekiah%201:1")).await;

        assert_eq!(
            body[1],
            "Bible-API: Verse not found for \"Hezekiah 1:1\"."
        );
    }

    #[tokio::test]
    async fn test_debug_route_task_panic_is_500() {
        let (status, body) = send(
            &app_with(Arc::new(PanickingGenerator)),
            get("/api/debug-apologetics?question=Why%3F"),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to fetch apologetics answer");
    }

    // ==================== Records ====================

    #[tokio::test]
    async fn test_record_crud_round() {
        let app = app();

        let (status, created) = send(
            &app,
            json_request(
                "POST",
                "/api/prayer-requests",
                json!({ "title": "Healing", "requestedBy": "Martha" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["status"], "active");

        let (status, fetched) = send(&app, get("/api/prayer-requests/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = send(
            &app,
            json_request(
                "PUT",
                "/api/prayer-requests/1",
                json!({ "title": "Healing", "requestedBy": "Martha", "status": "answered" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "answered");
        assert_eq!(updated["createdAt"], created["createdAt"]);

        let (status, _) = send(
            &app,
            Request::builder()
                .method("DELETE")
                .uri("/api/prayer-requests/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, list) = send(&app, get("/api/prayer-requests")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_record_not_found() {
        let (status, body) = send(&app(), get("/api/sermons/99")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Sermon 99 not found");
    }

    #[tokio::test]
    async fn test_record_validation_is_400() {
        let app = app();

        let (status, body) = send(
            &app,
            json_request("POST", "/api/tasks", json!({ "title": "  " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid title: must not be blank");

        let (status, _) = send(
            &app,
            json_request("POST", "/api/team-members", json!({ "role": "Usher" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, get("/api/events/not-a-number")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_every_collection_is_routed() {
        let app = app();
        for kind in sanctuary_domain::RecordKind::ALL {
            let (status, body) = send(&app, get(&format!("/api/{}", kind.slug()))).await;
            assert_eq!(status, StatusCode::OK, "{}", kind.slug());
            assert!(body.is_array());
        }
    }

    // ==================== Status ====================

    #[tokio::test]
    async fn test_overview_counts_records() {
        let app = app();
        send(
            &app,
            json_request("POST", "/api/tasks", json!({ "title": "Stack chairs" })),
        )
        .await;

        let (status, body) = send(&app, get("/api/overview")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["openTasks"], 1);
        assert_eq!(body["counts"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), get("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_run_stops_on_cancel() {
        let shutdown = CancellationToken::new();
        let apologetics =
            AggregateAnswerUseCase::new(Arc::new(MockGenerator), Arc::new(MockVerses));
        let server = tokio::spawn(run(
            AppState::new(apologetics, in_memory_repositories()),
            "127.0.0.1:0",
            shutdown.clone(),
        ));

        shutdown.cancel();

        server.await.unwrap().unwrap();
    }
}
