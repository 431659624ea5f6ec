use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::actor::{ensure_known_actor, Actor, ActorError};
use crate::audit::{AuditRecorder, EntityKind};
use crate::features::permissions::types::find_permission;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePermissionCommand {
    pub id: i64,
    #[serde(skip)]
    pub actor: Actor,
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePermissionError {
    #[error(transparent)]
    Actor(#[from] ActorError),
    #[error("Permission with ID {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<(), DeletePermissionError>> for DeletePermissionCommand {}

impl crate::cqrs::middleware::Command for DeletePermissionCommand {}

#[tracing::instrument(skip(pool, command), fields(id = command.id, actor = %command.actor))]
pub async fn handle(
    pool: SqlitePool,
    command: DeletePermissionCommand,
) -> Result<(), DeletePermissionError> {
    ensure_known_actor(&pool, &command.actor).await?;

    let prior = find_permission(&pool, command.id)
        .await?
        .ok_or(DeletePermissionError::NotFound(command.id))?;

    let result = sqlx::query("DELETE FROM permissions WHERE id = ?")
        .bind(command.id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DeletePermissionError::NotFound(command.id));
    }

    AuditRecorder::new(pool)
        .record_delete(EntityKind::Permissao, command.actor.as_str(), &prior)
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::*;

    #[tokio::test]
    async fn test_unknown_actor_leaves_permission_in_place() {
        let pool = test_pool().await;
        let id = TestPermission::new("Leitura", 1).insert(&pool).await;

        let result = handle(
            pool.clone(),
            DeletePermissionCommand {
                id,
                actor: Actor::new("ghost"),
            },
        )
        .await;

        assert!(matches!(result, Err(DeletePermissionError::Actor(ActorError::Unknown(_)))));
        assert!(find_permission(&pool, id).await.unwrap().is_some());
        assert_eq!(count_audit_records(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_known_actor_deletes() {
        let pool = test_pool().await;
        TestAccessLog::new("admin").insert(&pool).await;
        let id = TestPermission::new("Escrita", 2).insert(&pool).await;

        handle(
            pool.clone(),
            DeletePermissionCommand {
                id,
                actor: Actor::new("admin"),
            },
        )
        .await
        .unwrap();

        assert!(find_permission(&pool, id).await.unwrap().is_none());
        assert_eq!(count_audit_records(&pool).await, 1);
    }
}
