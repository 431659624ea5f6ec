//! Delete access-log entry command
//!
//! Without an identity header the deletion is attributed to the entry's own
//! user. A named actor is validated as for any other write.

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::actor::{ensure_known_actor, Actor, ActorError};
use crate::audit::{AuditRecorder, EntityKind};
use crate::features::access_logs::types::find_access_log;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccessLogCommand {
    pub id: i64,
    #[serde(skip)]
    pub actor: Actor,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteAccessLogError {
    #[error(transparent)]
    Actor(#[from] ActorError),
    #[error("Access log with ID {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<(), DeleteAccessLogError>> for DeleteAccessLogCommand {}

impl crate::cqrs::middleware::Command for DeleteAccessLogCommand {}

#[tracing::instrument(skip(pool, command), fields(id = command.id, actor = %command.actor))]
pub async fn handle(
    pool: SqlitePool,
    command: DeleteAccessLogCommand,
) -> Result<(), DeleteAccessLogError> {
    ensure_known_actor(&pool, &command.actor).await?;

    let prior = find_access_log(&pool, command.id)
        .await?
        .ok_or(DeleteAccessLogError::NotFound(command.id))?;

    let actor = if command.actor.is_system() {
        prior.user.clone()
    } else {
        command.actor.as_str().to_string()
    };

    let result = sqlx::query("DELETE FROM access_logs WHERE id = ?")
        .bind(command.id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DeleteAccessLogError::NotFound(command.id));
    }

    AuditRecorder::new(pool)
        .record_delete(EntityKind::LogAcesso, &actor, &prior)
        .await;

    Ok(())
}
