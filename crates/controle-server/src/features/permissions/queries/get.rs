use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::permissions::types::{find_permission, Permission};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPermissionQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetPermissionError {
    #[error("Permission with ID {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Permission, GetPermissionError>> for GetPermissionQuery {}

impl crate::cqrs::middleware::Query for GetPermissionQuery {}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: GetPermissionQuery,
) -> Result<Permission, GetPermissionError> {
    find_permission(&pool, query.id)
        .await?
        .ok_or(GetPermissionError::NotFound(query.id))
}
