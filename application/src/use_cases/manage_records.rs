//! Manage Records use case.
//!
//! Validated CRUD over one ministry record collection. Drafts are checked
//! with [`RecordFields::validate`] before they reach the repository, so the
//! store only ever holds valid records.

use crate::ports::record_repository::{RecordRepository, StorageError};
use chrono::Utc;
use sanctuary_domain::{DomainError, Record, RecordFields, RecordId, RecordKind};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while managing records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: RecordId },

    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Use case for CRUD on the collection holding `F` records.
pub struct ManageRecordsUseCase<F: RecordFields> {
    repository: Arc<dyn RecordRepository<F>>,
}

impl<F: RecordFields> Clone for ManageRecordsUseCase<F> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<F: RecordFields> ManageRecordsUseCase<F> {
    pub fn new(repository: Arc<dyn RecordRepository<F>>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Record<F>>, RecordError> {
        Ok(self.repository.list().await?)
    }

    pub async fn get(&self, id: RecordId) -> Result<Record<F>, RecordError> {
        self.repository
            .get(id)
            .await?
            .ok_or(RecordError::NotFound { kind: F::KIND, id })
    }

    pub async fn create(&self, fields: F) -> Result<Record<F>, RecordError> {
        fields.validate()?;
        let record = self.repository.insert(fields, Utc::now()).await?;
        info!("Created {} {}", F::KIND, record.id);
        Ok(record)
    }

    pub async fn update(&self, id: RecordId, fields: F) -> Result<Record<F>, RecordError> {
        fields.validate()?;
        let record = self
            .repository
            .update(id, fields, Utc::now())
            .await?
            .ok_or(RecordError::NotFound { kind: F::KIND, id })?;
        debug!("Updated {} {}", F::KIND, id);
        Ok(record)
    }

    pub async fn delete(&self, id: RecordId) -> Result<(), RecordError> {
        if self.repository.delete(id).await? {
            info!("Deleted {} {}", F::KIND, id);
            Ok(())
        } else {
            Err(RecordError::NotFound { kind: F::KIND, id })
        }
    }
}
