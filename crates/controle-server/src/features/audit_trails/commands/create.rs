//! Manual audit record insert
//!
//! Administrative path for writing an audit record directly. The record must
//! still carry the snapshots its operation requires, and each snapshot must
//! be JSON text.

use chrono::{DateTime, Utc};
use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::audit::{
    decode_snapshot, insert_audit_record, AuditRecord, NewAuditRecord, OperationKind,
    SnapshotShapeError, UnknownOperationError,
};
use crate::features::shared::validation::{validate_text, FieldValidationError};

pub const ENTITY_MAX_LENGTH: usize = 100;
pub const OPERATION_MAX_LENGTH: usize = 20;
pub const ACTOR_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditTrailCommand {
    pub entity: String,
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub actor: String,
    #[serde(default)]
    pub prior_state: Option<String>,
    #[serde(default)]
    pub new_state: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateAuditTrailError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("{0}")]
    Operation(#[from] UnknownOperationError),

    #[error("{0}")]
    Shape(#[from] SnapshotShapeError),

    #[error("{field} is not valid JSON: {source}")]
    Snapshot {
        field: &'static str,
        source: serde_json::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<AuditRecord, CreateAuditTrailError>> for CreateAuditTrailCommand {}

impl crate::cqrs::middleware::Command for CreateAuditTrailCommand {}

impl CreateAuditTrailCommand {
    /// Validate fields and return the parsed operation
    pub fn validate(&self) -> Result<OperationKind, CreateAuditTrailError> {
        validate_text("entity", &self.entity, ENTITY_MAX_LENGTH)?;
        validate_text("operation", &self.operation, OPERATION_MAX_LENGTH)?;
        validate_text("actor", &self.actor, ACTOR_MAX_LENGTH)?;

        let operation: OperationKind = self.operation.parse()?;
        operation.check_snapshots(self.prior_state.is_some(), self.new_state.is_some())?;

        for (field, snapshot) in [("prior_state", &self.prior_state), ("new_state", &self.new_state)] {
            if let Some(text) = snapshot {
                decode_snapshot(text)
                    .map_err(|source| CreateAuditTrailError::Snapshot { field, source })?;
            }
        }

        Ok(operation)
    }
}

#[tracing::instrument(skip(pool, command), fields(entity = %command.entity, operation = %command.operation))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateAuditTrailCommand,
) -> Result<AuditRecord, CreateAuditTrailError> {
    let operation = command.validate()?;

    let record = NewAuditRecord {
        entity: command.entity,
        operation,
        timestamp: command.timestamp.unwrap_or_else(Utc::now),
        actor: command.actor,
        prior_state: command.prior_state,
        new_state: command.new_state,
    };

    Ok(insert_audit_record(&pool, &record).await?)
}
