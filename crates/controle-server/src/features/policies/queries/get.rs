use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::policies::types::{find_policy, Policy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPolicyQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetPolicyError {
    #[error("Policy with ID {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Policy, GetPolicyError>> for GetPolicyQuery {}

impl crate::cqrs::middleware::Query for GetPolicyQuery {}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, query: GetPolicyQuery) -> Result<Policy, GetPolicyError> {
    find_policy(&pool, query.id)
        .await?
        .ok_or(GetPolicyError::NotFound(query.id))
}
