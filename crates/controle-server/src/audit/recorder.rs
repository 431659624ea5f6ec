//! Failure-isolated audit recorder
//!
//! Handlers call the recorder after their own mutation has committed. A
//! recorder failure is logged and dropped; it never reaches the caller.

use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use super::models::{EntityKind, NewAuditRecord, OperationKind};
use super::queries::insert_audit_record;
use super::snapshot::encode_snapshot;

/// Writes one audit record per completed mutation
#[derive(Clone)]
pub struct AuditRecorder {
    pool: SqlitePool,
}

#[derive(Debug, thiserror::Error)]
enum RecordError {
    #[error(transparent)]
    Shape(#[from] super::models::SnapshotShapeError),

    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Audit insert failed: {0}")]
    Database(#[from] sqlx::Error),
}

impl AuditRecorder {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a mutation of `entity` performed by `actor`
    ///
    /// `prior` and `new` must match the shape `operation` requires. Any
    /// failure, including a shape mismatch, is logged at warn level and
    /// otherwise ignored.
    #[tracing::instrument(skip(self, prior, new), fields(entity = %entity, operation = %operation))]
    pub async fn record<T: Serialize + ?Sized>(
        &self,
        entity: EntityKind,
        operation: OperationKind,
        actor: &str,
        prior: Option<&T>,
        new: Option<&T>,
    ) {
        match self.try_record(entity, operation, actor, prior, new).await {
            Ok(id) => debug!(audit_id = id, actor = %actor, "Audit record written"),
            Err(e) => warn!(
                error = %e,
                actor = %actor,
                "Failed to write audit record; the mutation itself was not affected"
            ),
        }
    }

    pub async fn record_create<T: Serialize + ?Sized>(&self, entity: EntityKind, actor: &str, new: &T) {
        self.record(entity, OperationKind::Create, actor, None, Some(new))
            .await
    }

    pub async fn record_update<T: Serialize + ?Sized>(
        &self,
        entity: EntityKind,
        actor: &str,
        prior: &T,
        new: &T,
    ) {
        self.record(entity, OperationKind::Update, actor, Some(prior), Some(new))
            .await
    }

    pub async fn record_delete<T: Serialize + ?Sized>(&self, entity: EntityKind, actor: &str, prior: &T) {
        self.record(entity, OperationKind::Delete, actor, Some(prior), None)
            .await
    }

    async fn try_record<T: Serialize + ?Sized>(
        &self,
        entity: EntityKind,
        operation: OperationKind,
        actor: &str,
        prior: Option<&T>,
        new: Option<&T>,
    ) -> Result<i64, RecordError> {
        operation.check_snapshots(prior.is_some(), new.is_some())?;

        let record = NewAuditRecord {
            entity: entity.as_str().to_string(),
            operation,
            timestamp: Utc::now(),
            actor: actor.to_string(),
            prior_state: prior.map(encode_snapshot).transpose()?,
            new_state: new.map(encode_snapshot).transpose()?,
        };

        let inserted = insert_audit_record(&self.pool, &record).await?;
        Ok(inserted.id)
    }
}
