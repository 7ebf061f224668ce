//! API routes

mod apologetics;
mod records;
mod status;

pub use apologetics::{
    AnswerResponse, DEFAULT_DEBUG_QUESTION, QUESTION_REQUIRED, apologetics_routes,
};
pub use records::record_routes;
pub use status::{HealthResponse, health_routes, overview_routes};

use super::AppState;
use std::sync::Arc;

pub(crate) type AppStateArc = Arc<AppState>;
