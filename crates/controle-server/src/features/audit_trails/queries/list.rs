//! List audit records, newest first
//!
//! Optional filters narrow by entity kind, operation and actor. Blank filter
//! values are ignored.

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::audit::{
    query_audit_records, AuditFilter, AuditRecord, OperationKind, UnknownOperationError,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAuditTrailsQuery {
    #[serde(default)]
    pub entity: Option<String>,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListAuditTrailsError {
    #[error("{0}")]
    Operation(#[from] UnknownOperationError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Vec<AuditRecord>, ListAuditTrailsError>> for ListAuditTrailsQuery {}

impl crate::cqrs::middleware::Query for ListAuditTrailsQuery {}

impl ListAuditTrailsQuery {
    pub fn to_filter(&self) -> Result<AuditFilter, ListAuditTrailsError> {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let operation = non_blank(&self.operation)
            .map(|op| op.parse::<OperationKind>())
            .transpose()?;

        Ok(AuditFilter {
            entity: non_blank(&self.entity),
            operation,
            actor: non_blank(&self.actor),
        })
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: ListAuditTrailsQuery,
) -> Result<Vec<AuditRecord>, ListAuditTrailsError> {
    let filter = query.to_filter()?;
    Ok(query_audit_records(&pool, &filter).await?)
}
