//! Update policy command
//!
//! Replaces name, description and active flag. The creation time is never
//! touched.

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::actor::{ensure_known_actor, Actor, ActorError};
use crate::audit::{AuditRecorder, EntityKind};
use crate::features::policies::types::{
    find_policy, Policy, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, POLICY_COLUMNS,
};
use crate::features::shared::validation::{validate_text, FieldValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePolicyCommand {
    /// Set from the path
    #[serde(skip)]
    pub id: i64,

    pub name: String,
    pub description: String,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(skip)]
    pub actor: Actor,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum UpdatePolicyError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error("Policy with ID {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Policy, UpdatePolicyError>> for UpdatePolicyCommand {}

impl crate::cqrs::middleware::Command for UpdatePolicyCommand {}

impl UpdatePolicyCommand {
    pub fn validate(&self) -> Result<(), UpdatePolicyError> {
        validate_text("name", &self.name, NAME_MAX_LENGTH)?;
        validate_text("description", &self.description, DESCRIPTION_MAX_LENGTH)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(id = command.id, actor = %command.actor))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdatePolicyCommand,
) -> Result<Policy, UpdatePolicyError> {
    command.validate()?;
    ensure_known_actor(&pool, &command.actor).await?;

    let prior = find_policy(&pool, command.id)
        .await?
        .ok_or(UpdatePolicyError::NotFound(command.id))?;

    let sql = format!(
        "UPDATE policies SET name = ?, description = ?, active = ? WHERE id = ? RETURNING {POLICY_COLUMNS}"
    );
    let updated = sqlx::query_as::<_, Policy>(&sql)
        .bind(&command.name)
        .bind(&command.description)
        .bind(command.active)
        .bind(command.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(UpdatePolicyError::NotFound(command.id))?;

    AuditRecorder::new(pool)
        .record_update(EntityKind::Politica, command.actor.as_str(), &prior, &updated)
        .await;

    Ok(updated)
}
