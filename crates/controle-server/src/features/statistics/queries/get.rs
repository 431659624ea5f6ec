//! System statistics
//!
//! "Today" is the current UTC calendar date.

use chrono::Utc;
use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetStatisticsQuery {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub policies: PolicyCounts,
    pub permissions: TotalCount,
    pub access_logs: AccessLogCounts,
    pub audit_trails: TotalCount,
    /// Access-log entries grouped by action, most frequent first
    pub logs_by_action: Vec<ActionCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCounts {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCount {
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLogCounts {
    pub total: i64,
    pub today: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActionCount {
    pub action: String,
    pub count: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetStatisticsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Statistics, GetStatisticsError>> for GetStatisticsQuery {}

impl crate::cqrs::middleware::Query for GetStatisticsQuery {}

async fn count(pool: &SqlitePool, sql: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(sql).fetch_one(pool).await
}

#[tracing::instrument(skip(pool, _query))]
pub async fn handle(
    pool: SqlitePool,
    _query: GetStatisticsQuery,
) -> Result<Statistics, GetStatisticsError> {
    let policies_total = count(&pool, "SELECT COUNT(*) FROM policies").await?;
    let policies_active = count(&pool, "SELECT COUNT(*) FROM policies WHERE active").await?;
    let permissions_total = count(&pool, "SELECT COUNT(*) FROM permissions").await?;
    let logs_total = count(&pool, "SELECT COUNT(*) FROM access_logs").await?;
    let audit_total = count(&pool, "SELECT COUNT(*) FROM audit_trails").await?;

    let today = Utc::now().date_naive().to_string();
    let logs_today: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM access_logs WHERE date(timestamp) = ?")
            .bind(today)
            .fetch_one(&pool)
            .await?;

    let logs_by_action = sqlx::query_as::<_, ActionCount>(
        "SELECT action, COUNT(*) AS count FROM access_logs GROUP BY action ORDER BY count DESC, action",
    )
    .fetch_all(&pool)
    .await?;

    Ok(Statistics {
        policies: PolicyCounts {
            total: policies_total,
            active: policies_active,
            inactive: policies_total - policies_active,
        },
        permissions: TotalCount {
            total: permissions_total,
        },
        access_logs: AccessLogCounts {
            total: logs_total,
            today: logs_today,
        },
        audit_trails: TotalCount { total: audit_total },
        logs_by_action,
    })
}
