//! CRUD routes for the ministry record collections
//!
//! One generic set of handlers serves every collection; the path prefix is
//! the kind's slug, e.g. `/api/prayer-requests/:id`.

use super::AppStateArc;
use crate::server::{ApiError, AppState};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sanctuary_application::{ManageRecordsUseCase, MinistryRepositories, RepositoryFor};
use sanctuary_domain::{Record, RecordFields, RecordId};

/// Routes for the collection holding `F` records.
pub fn record_routes<F>() -> Router<AppStateArc>
where
    F: RecordFields,
    MinistryRepositories: RepositoryFor<F>,
{
    let collection = format!("/api/{}", F::KIND.slug());
    let item = format!("{}/:id", collection);

    Router::new()
        .route(&collection, get(list_records::<F>).post(create_record::<F>))
        .route(
            &item,
            get(get_record::<F>)
                .put(update_record::<F>)
                .delete(delete_record::<F>),
        )
}

fn records<F>(state: &AppState) -> ManageRecordsUseCase<F>
where
    F: RecordFields,
    MinistryRepositories: RepositoryFor<F>,
{
    ManageRecordsUseCase::new(<MinistryRepositories as RepositoryFor<F>>::repository(
        &state.repositories,
    ))
}

fn record_id(path: Result<Path<RecordId>, PathRejection>) -> Result<RecordId, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

fn draft<F: RecordFields>(body: Result<Json<F>, JsonRejection>) -> Result<F, ApiError> {
    body.map(|Json(fields)| fields)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

async fn list_records<F>(State(state): State<AppStateArc>) -> Result<Json<Vec<Record<F>>>, ApiError>
where
    F: RecordFields,
    MinistryRepositories: RepositoryFor<F>,
{
    Ok(Json(records::<F>(&state).list().await?))
}

async fn get_record<F>(
    State(state): State<AppStateArc>,
    path: Result<Path<RecordId>, PathRejection>,
) -> Result<Json<Record<F>>, ApiError>
where
    F: RecordFields,
    MinistryRepositories: RepositoryFor<F>,
{
    let id = record_id(path)?;
    Ok(Json(records::<F>(&state).get(id).await?))
}

async fn create_record<F>(
    State(state): State<AppStateArc>,
    body: Result<Json<F>, JsonRejection>,
) -> Result<(StatusCode, Json<Record<F>>), ApiError>
where
    F: RecordFields,
    MinistryRepositories: RepositoryFor<F>,
{
    let fields = draft(body)?;
    let record = records::<F>(&state).create(fields).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_record<F>(
    State(state): State<AppStateArc>,
    path: Result<Path<RecordId>, PathRejection>,
    body: Result<Json<F>, JsonRejection>,
) -> Result<Json<Record<F>>, ApiError>
where
    F: RecordFields,
    MinistryRepositories: RepositoryFor<F>,
{
    let id = record_id(path)?;
    let fields = draft(body)?;
    Ok(Json(records::<F>(&state).update(id, fields).await?))
}

async fn delete_record<F>(
    State(state): State<AppStateArc>,
    path: Result<Path<RecordId>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    F: RecordFields,
    MinistryRepositories: RepositoryFor<F>,
{
    let id = record_id(path)?;
    records::<F>(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
