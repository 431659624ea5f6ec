//! Toggle policy status command

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::actor::{ensure_known_actor, Actor, ActorError};
use crate::audit::{AuditRecorder, EntityKind};
use crate::features::policies::types::{find_policy, Policy, POLICY_COLUMNS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TogglePolicyStatusCommand {
    pub id: i64,
    #[serde(skip)]
    pub actor: Actor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TogglePolicyStatusResponse {
    pub id: i64,
    pub active: bool,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TogglePolicyStatusError {
    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error("Policy with ID {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<TogglePolicyStatusResponse, TogglePolicyStatusError>>
    for TogglePolicyStatusCommand
{
}

impl crate::cqrs::middleware::Command for TogglePolicyStatusCommand {}

#[tracing::instrument(skip(pool, command), fields(id = command.id, actor = %command.actor))]
pub async fn handle(
    pool: SqlitePool,
    command: TogglePolicyStatusCommand,
) -> Result<TogglePolicyStatusResponse, TogglePolicyStatusError> {
    ensure_known_actor(&pool, &command.actor).await?;

    let prior = find_policy(&pool, command.id)
        .await?
        .ok_or(TogglePolicyStatusError::NotFound(command.id))?;

    let sql = format!("UPDATE policies SET active = ? WHERE id = ? RETURNING {POLICY_COLUMNS}");
    let updated = sqlx::query_as::<_, Policy>(&sql)
        .bind(!prior.active)
        .bind(command.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(TogglePolicyStatusError::NotFound(command.id))?;

    AuditRecorder::new(pool)
        .record_update(EntityKind::Politica, command.actor.as_str(), &prior, &updated)
        .await;

    let message = if updated.active {
        "Policy activated successfully"
    } else {
        "Policy deactivated successfully"
    };

    Ok(TogglePolicyStatusResponse {
        id: updated.id,
        active: updated.active,
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{decode_snapshot, query_audit_records, AuditFilter};
    use crate::features::shared::test_helpers::*;

    #[tokio::test]
    async fn test_toggle_flips_and_audits_only_active() {
        let pool = test_pool().await;
        let id = TestPolicy::new("Backup").insert(&pool).await;

        let response = handle(
            pool.clone(),
            TogglePolicyStatusCommand {
                id,
                actor: Actor::system(),
            },
        )
        .await
        .unwrap();
        assert!(!response.active);
        assert_eq!(response.message, "Policy deactivated successfully");

        let records = query_audit_records(&pool, &AuditFilter::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        let mut prior = decode_snapshot(records[0].prior_state.as_deref().unwrap()).unwrap();
        let mut new = decode_snapshot(records[0].new_state.as_deref().unwrap()).unwrap();
        assert_eq!(prior["active"], true);
        assert_eq!(new["active"], false);

        prior["active"] = serde_json::Value::Null;
        new["active"] = serde_json::Value::Null;
        assert_eq!(prior, new);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores() {
        let pool = test_pool().await;
        let id = TestPolicy::new("Backup").inactive().insert(&pool).await;

        let cmd = TogglePolicyStatusCommand {
            id,
            actor: Actor::system(),
        };
        assert!(handle(pool.clone(), cmd.clone()).await.unwrap().active);
        assert!(!handle(pool.clone(), cmd).await.unwrap().active);
        assert_eq!(count_audit_records(&pool).await, 2);
    }

    #[tokio::test]
    async fn test_toggle_missing_policy() {
        let pool = test_pool().await;
        let result = handle(
            pool,
            TogglePolicyStatusCommand {
                id: 99,
                actor: Actor::system(),
            },
        )
        .await;
        assert!(matches!(result, Err(TogglePolicyStatusError::NotFound(99))));
    }
}
