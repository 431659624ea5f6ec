use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::audit::{get_audit_record, AuditRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAuditTrailQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetAuditTrailError {
    #[error("Audit record with ID {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<AuditRecord, GetAuditTrailError>> for GetAuditTrailQuery {}

impl crate::cqrs::middleware::Query for GetAuditTrailQuery {}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: GetAuditTrailQuery,
) -> Result<AuditRecord, GetAuditTrailError> {
    get_audit_record(&pool, query.id)
        .await?
        .ok_or(GetAuditTrailError::NotFound(query.id))
}
