//! Create permission command

use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::actor::{ensure_known_actor, Actor, ActorError};
use crate::audit::{AuditRecorder, EntityKind};
use crate::features::permissions::types::{
    Permission, DESCRIPTION_MAX_LENGTH, MAX_LEVEL, MIN_LEVEL, NAME_MAX_LENGTH,
    PERMISSION_COLUMNS,
};
use crate::features::shared::validation::{validate_range, validate_text, FieldValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePermissionCommand {
    pub name: String,
    /// Access level, 1 to 5 inclusive
    pub level: i64,
    pub description: String,
    #[serde(skip)]
    pub actor: Actor,
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePermissionError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<Permission, CreatePermissionError>> for CreatePermissionCommand {}

impl crate::cqrs::middleware::Command for CreatePermissionCommand {}

impl CreatePermissionCommand {
    pub fn validate(&self) -> Result<(), CreatePermissionError> {
        validate_text("name", &self.name, NAME_MAX_LENGTH)?;
        validate_range("level", self.level, MIN_LEVEL, MAX_LEVEL)?;
        validate_text("description", &self.description, DESCRIPTION_MAX_LENGTH)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(name = %command.name, level = command.level, actor = %command.actor))]
pub async fn handle(
    pool: SqlitePool,
    command: CreatePermissionCommand,
) -> Result<Permission, CreatePermissionError> {
    command.validate()?;
    ensure_known_actor(&pool, &command.actor).await?;

    let sql = format!(
        "INSERT INTO permissions (name, level, description) VALUES (?, ?, ?) RETURNING {PERMISSION_COLUMNS}"
    );
    let permission = sqlx::query_as::<_, Permission>(&sql)
        .bind(&command.name)
        .bind(command.level)
        .bind(&command.description)
        .fetch_one(&pool)
        .await?;

    AuditRecorder::new(pool)
        .record_create(EntityKind::Permissao, command.actor.as_str(), &permission)
        .await;

    Ok(permission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{query_audit_records, AuditFilter};
    use crate::features::shared::test_helpers::*;

    fn command(level: i64) -> CreatePermissionCommand {
        CreatePermissionCommand {
            name: "Leitura".to_string(),
            level,
            description: "Acesso somente leitura".to_string(),
            actor: Actor::system(),
        }
    }

    #[test]
    fn test_level_bounds() {
        assert!(command(1).validate().is_ok());
        assert!(command(5).validate().is_ok());
        assert!(matches!(
            command(0).validate(),
            Err(CreatePermissionError::Validation(FieldValidationError::OutOfRange { .. }))
        ));
        assert!(command(6).validate().is_err());
    }

    #[tokio::test]
    async fn test_handle_creates_and_audits() {
        let pool = test_pool().await;

        let permission = handle(pool.clone(), command(3)).await.unwrap();
        assert_eq!(permission.level, 3);

        let records = query_audit_records(&pool, &AuditFilter::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entity, "Permissao");
        assert_eq!(records[0].actor, "Sistema");
    }

    #[tokio::test]
    async fn test_out_of_range_level_is_not_stored() {
        let pool = test_pool().await;
        let result = handle(pool.clone(), command(9)).await;
        assert!(matches!(result, Err(CreatePermissionError::Validation(_))));
        assert_eq!(count_audit_records(&pool).await, 0);
    }
}
