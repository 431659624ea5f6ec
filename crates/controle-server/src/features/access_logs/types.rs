//! Access-log entry
//!
//! The access log doubles as the directory of known users: a name is a valid
//! actor once it appears here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub const USER_MAX_LENGTH: usize = 100;
pub const ACTION_MAX_LENGTH: usize = 200;
/// Long enough for a textual IPv6 address
pub const ORIGIN_IP_MAX_LENGTH: usize = 45;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AccessLogEntry {
    pub id: i64,
    #[sqlx(rename = "user_name")]
    pub user: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub origin_ip: String,
}

pub(crate) const ACCESS_LOG_COLUMNS: &str = "id, user_name, action, timestamp, origin_ip";

pub(crate) async fn find_access_log(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<AccessLogEntry>, sqlx::Error> {
    let sql = format!("SELECT {ACCESS_LOG_COLUMNS} FROM access_logs WHERE id = ?");
    sqlx::query_as::<_, AccessLogEntry>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}
