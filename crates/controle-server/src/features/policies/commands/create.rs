//! Create policy command

use chrono::{DateTime, Utc};
use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::actor::{ensure_known_actor, Actor, ActorError};
use crate::audit::{AuditRecorder, EntityKind};
use crate::features::policies::types::{
    Policy, DESCRIPTION_MAX_LENGTH, NAME_MAX_LENGTH, POLICY_COLUMNS,
};
use crate::features::shared::validation::{validate_text, FieldValidationError};

/// Command to create a new policy
///
/// # Examples
///
/// ```rust,ignore
/// let command = CreatePolicyCommand {
///     name: "Política de Senhas".to_string(),
///     description: "Senhas com no mínimo 8 caracteres".to_string(),
///     created_at: None,
///     active: true,
///     actor: Actor::new("admin"),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePolicyCommand {
    pub name: String,
    pub description: String,

    /// Defaults to the time of creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default = "default_active")]
    pub active: bool,

    /// Set from the request headers, never from the body
    #[serde(skip)]
    pub actor: Actor,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePolicyError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Policy, CreatePolicyError>> for CreatePolicyCommand {}

impl crate::cqrs::middleware::Command for CreatePolicyCommand {}

impl CreatePolicyCommand {
    pub fn validate(&self) -> Result<(), CreatePolicyError> {
        validate_text("name", &self.name, NAME_MAX_LENGTH)?;
        validate_text("description", &self.description, DESCRIPTION_MAX_LENGTH)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(name = %command.name, actor = %command.actor))]
pub async fn handle(
    pool: SqlitePool,
    command: CreatePolicyCommand,
) -> Result<Policy, CreatePolicyError> {
    command.validate()?;
    ensure_known_actor(&pool, &command.actor).await?;

    let sql = format!(
        "INSERT INTO policies (name, description, created_at, active) VALUES (?, ?, ?, ?) RETURNING {POLICY_COLUMNS}"
    );
    let policy = sqlx::query_as::<_, Policy>(&sql)
        .bind(&command.name)
        .bind(&command.description)
        .bind(command.created_at.unwrap_or_else(Utc::now))
        .bind(command.active)
        .fetch_one(&pool)
        .await?;

    AuditRecorder::new(pool)
        .record_create(EntityKind::Politica, command.actor.as_str(), &policy)
        .await;

    Ok(policy)
}
