use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::access_logs::types::{find_access_log, AccessLogEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAccessLogQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetAccessLogError {
    #[error("Access log with ID {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<AccessLogEntry, GetAccessLogError>> for GetAccessLogQuery {}

impl crate::cqrs::middleware::Query for GetAccessLogQuery {}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: GetAccessLogQuery,
) -> Result<AccessLogEntry, GetAccessLogError> {
    find_access_log(&pool, query.id)
        .await?
        .ok_or(GetAccessLogError::NotFound(query.id))
}
