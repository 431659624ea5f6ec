use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::features::permissions::types::{Permission, PERMISSION_COLUMNS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPermissionsQuery {}

#[derive(Debug, thiserror::Error)]
pub enum ListPermissionsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Vec<Permission>, ListPermissionsError>> for ListPermissionsQuery {}

impl crate::cqrs::middleware::Query for ListPermissionsQuery {}

#[tracing::instrument(skip(pool, _query))]
pub async fn handle(
    pool: SqlitePool,
    _query: ListPermissionsQuery,
) -> Result<Vec<Permission>, ListPermissionsError> {
    let sql = format!("SELECT {PERMISSION_COLUMNS} FROM permissions ORDER BY id");
    Ok(sqlx::query_as::<_, Permission>(&sql).fetch_all(&pool).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::*;

    #[tokio::test]
    async fn test_list() {
        let pool = test_pool().await;
        TestPermission::new("Leitura", 1).insert(&pool).await;
        TestPermission::new("Escrita", 2).insert(&pool).await;

        let permissions = handle(pool, ListPermissionsQuery::default()).await.unwrap();
        assert_eq!(permissions.len(), 2);
        assert_eq!(permissions[0].name, "Leitura");
    }
}
