use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::access_logs::types::{AccessLogEntry, ACCESS_LOG_COLUMNS};

/// All access-log entries, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAccessLogsQuery {}

#[derive(Debug, thiserror::Error)]
pub enum ListAccessLogsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Vec<AccessLogEntry>, ListAccessLogsError>> for ListAccessLogsQuery {}

impl crate::cqrs::middleware::Query for ListAccessLogsQuery {}

#[tracing::instrument(skip(pool, _query))]
pub async fn handle(
    pool: SqlitePool,
    _query: ListAccessLogsQuery,
) -> Result<Vec<AccessLogEntry>, ListAccessLogsError> {
    // julianday() compares instants, not the stored text
    let sql = format!(
        "SELECT {ACCESS_LOG_COLUMNS} FROM access_logs ORDER BY julianday(timestamp) DESC, id DESC"
    );
    Ok(sqlx::query_as::<_, AccessLogEntry>(&sql).fetch_all(&pool).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::*;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_newest_first() {
        let pool = test_pool().await;
        let now = Utc::now();
        TestAccessLog::new("a").at(now - Duration::days(2)).insert(&pool).await;
        TestAccessLog::new("b").at(now).insert(&pool).await;
        TestAccessLog::new("c").at(now - Duration::hours(1)).insert(&pool).await;

        let users: Vec<_> = handle(pool, ListAccessLogsQuery::default())
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.user)
            .collect();
        assert_eq!(users, vec!["b", "c", "a"]);
    }
}
