use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::policies::types::{Policy, POLICY_COLUMNS};

/// List every policy, oldest id first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPoliciesQuery {}

#[derive(Debug, thiserror::Error)]
pub enum ListPoliciesError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Vec<Policy>, ListPoliciesError>> for ListPoliciesQuery {}

impl crate::cqrs::middleware::Query for ListPoliciesQuery {}

#[tracing::instrument(skip(pool, _query))]
pub async fn handle(
    pool: SqlitePool,
    _query: ListPoliciesQuery,
) -> Result<Vec<Policy>, ListPoliciesError> {
    let sql = format!("SELECT {POLICY_COLUMNS} FROM policies ORDER BY id");
    let policies = sqlx::query_as::<_, Policy>(&sql).fetch_all(&pool).await?;
    Ok(policies)
}
