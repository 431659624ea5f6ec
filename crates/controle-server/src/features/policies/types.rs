//! Policy record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub const NAME_MAX_LENGTH: usize = 200;
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

/// An internal-control policy
///
/// Also the snapshot shape written to the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Policy {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

pub(crate) const POLICY_COLUMNS: &str = "id, name, description, created_at, active";

pub(crate) async fn find_policy(pool: &SqlitePool, id: i64) -> Result<Option<Policy>, sqlx::Error> {
    let sql = format!("SELECT {POLICY_COLUMNS} FROM policies WHERE id = ?");
    sqlx::query_as::<_, Policy>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}
