use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::actor::{ensure_known_actor, Actor, ActorError};
use crate::audit::{AuditRecorder, EntityKind};
use crate::features::policies::types::find_policy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePolicyCommand {
    pub id: i64,
    #[serde(skip)]
    pub actor: Actor,
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePolicyError {
    #[error(transparent)]
    Actor(#[from] ActorError),
    #[error("Policy with ID {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<(), DeletePolicyError>> for DeletePolicyCommand {}

impl crate::cqrs::middleware::Command for DeletePolicyCommand {}

#[tracing::instrument(skip(pool, command), fields(id = command.id, actor = %command.actor))]
pub async fn handle(pool: SqlitePool, command: DeletePolicyCommand) -> Result<(), DeletePolicyError> {
    ensure_known_actor(&pool, &command.actor).await?;

    let prior = find_policy(&pool, command.id)
        .await?
        .ok_or(DeletePolicyError::NotFound(command.id))?;

    let result = sqlx::query("DELETE FROM policies WHERE id = ?")
        .bind(command.id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DeletePolicyError::NotFound(command.id));
    }

    AuditRecorder::new(pool)
        .record_delete(EntityKind::Politica, command.actor.as_str(), &prior)
        .await;

    Ok(())
}
