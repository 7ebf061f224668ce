//! Overview and health routes

use super::AppStateArc;
use crate::server::ApiError;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use sanctuary_application::MinistryOverview;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub fn overview_routes() -> Router<AppStateArc> {
    Router::new().route("/api/overview", get(overview))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health))
}

async fn overview(State(state): State<AppStateArc>) -> Result<Json<MinistryOverview>, ApiError> {
    Ok(Json(state.overview.summary(Utc::now()).await?))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
