//! Administrative removal of an audit record
//!
//! Removing an audit record is itself not audited.

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::audit::delete_audit_record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAuditTrailCommand {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteAuditTrailError {
    #[error("Audit record with ID {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<(), DeleteAuditTrailError>> for DeleteAuditTrailCommand {}

impl crate::cqrs::middleware::Command for DeleteAuditTrailCommand {}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: DeleteAuditTrailCommand,
) -> Result<(), DeleteAuditTrailError> {
    if delete_audit_record(&pool, command.id).await? {
        Ok(())
    } else {
        Err(DeleteAuditTrailError::NotFound(command.id))
    }
}
