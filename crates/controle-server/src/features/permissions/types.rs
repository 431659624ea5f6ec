//! Permission record

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub const NAME_MAX_LENGTH: usize = 100;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;
pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 5;

/// A named permission with an access level from 1 to 5
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Permission {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub description: String,
}

pub(crate) const PERMISSION_COLUMNS: &str = "id, name, level, description";

pub(crate) async fn find_permission(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Permission>, sqlx::Error> {
    let sql = format!("SELECT {PERMISSION_COLUMNS} FROM permissions WHERE id = ?");
    sqlx::query_as::<_, Permission>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}
