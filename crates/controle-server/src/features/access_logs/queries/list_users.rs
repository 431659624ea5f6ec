//! Known users: the distinct user names in the access log

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersQuery {}

#[derive(Debug, thiserror::Error)]
pub enum ListUsersError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Vec<String>, ListUsersError>> for ListUsersQuery {}

impl crate::cqrs::middleware::Query for ListUsersQuery {}

#[tracing::instrument(skip(pool, _query))]
pub async fn handle(pool: SqlitePool, _query: ListUsersQuery) -> Result<Vec<String>, ListUsersError> {
    let users =
        sqlx::query_scalar("SELECT DISTINCT user_name FROM access_logs ORDER BY user_name")
            .fetch_all(&pool)
            .await?;
    Ok(users)
}
