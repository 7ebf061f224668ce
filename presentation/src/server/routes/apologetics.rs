//! Apologetics aggregation routes

use super::AppStateArc;
use crate::server::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use sanctuary_domain::Question;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

pub const QUESTION_REQUIRED: &str = "Question is required";

/// Question used by the debug route when none is given.
pub const DEFAULT_DEBUG_QUESTION: &str = "John 3:16";

#[derive(Debug, Deserialize)]
struct AskRequest {
    question: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
struct DebugQuery {
    question: Option<String>,
}

pub fn apologetics_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/apologetics", post(answer))
        .route("/api/debug-apologetics", get(debug_answer))
}

async fn answer(
    State(state): State<AppStateArc>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let question = payload
        .ok()
        .and_then(|Json(req)| req.question)
        .and_then(Question::try_new)
        .ok_or_else(|| ApiError::BadRequest(QUESTION_REQUIRED.to_string()))?;

    // The aggregation runs on its own task so a panic in an adapter is
    // reported as a 500 instead of tearing down the connection.
    let use_case = state.apologetics.clone();
    let answer = tokio::spawn(async move { use_case.execute(question.trimmed()).await })
        .await
        .map_err(|e| {
            error!("Apologetics aggregation task failed: {}", e);
            ApiError::Internal("Failed to fetch apologetics answer".to_string())
        })?;

    debug!(
        "Answered {:?} with {} fragments",
        answer.query,
        answer.fragments.len()
    );
    Ok(Json(AnswerResponse {
        answer: answer.display_text(),
    }))
}

/// Raw rendered fragments, including failure sentences.
async fn debug_answer(
    State(state): State<AppStateArc>,
    Query(query): Query<DebugQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let question = query
        .question
        .filter(|q| !q.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DEBUG_QUESTION.to_string());

    let use_case = state.apologetics.clone();
    let answer = tokio::spawn(async move { use_case.execute(&question).await })
        .await
        .map_err(|e| {
            error!("Debug aggregation task failed: {}", e);
            ApiError::Internal("Failed to fetch apologetics answer".to_string())
        })?;

    Ok(Json(answer.rendered()))
}
