//! Create access-log entry command
//!
//! The entry names its own user, and that user is the actor on the audit
//! record. The identity header plays no part, so a new user becomes known by
//! logging their first access.

use chrono::{DateTime, Utc};
use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::audit::{AuditRecorder, EntityKind};
use crate::features::access_logs::types::{
    AccessLogEntry, ACCESS_LOG_COLUMNS, ACTION_MAX_LENGTH, ORIGIN_IP_MAX_LENGTH, USER_MAX_LENGTH,
};
use crate::features::shared::validation::{validate_text, FieldValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccessLogCommand {
    pub user: String,
    pub action: String,
    /// Defaults to the time of creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub origin_ip: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateAccessLogError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<AccessLogEntry, CreateAccessLogError>> for CreateAccessLogCommand {}

impl crate::cqrs::middleware::Command for CreateAccessLogCommand {}

impl CreateAccessLogCommand {
    pub fn validate(&self) -> Result<(), CreateAccessLogError> {
        validate_text("user", &self.user, USER_MAX_LENGTH)?;
        validate_text("action", &self.action, ACTION_MAX_LENGTH)?;
        validate_text("origin_ip", &self.origin_ip, ORIGIN_IP_MAX_LENGTH)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(user = %command.user, action = %command.action))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateAccessLogCommand,
) -> Result<AccessLogEntry, CreateAccessLogError> {
    command.validate()?;

    let sql = format!(
        "INSERT INTO access_logs (user_name, action, timestamp, origin_ip) VALUES (?, ?, ?, ?) RETURNING {ACCESS_LOG_COLUMNS}"
    );
    let entry = sqlx::query_as::<_, AccessLogEntry>(&sql)
        .bind(&command.user)
        .bind(&command.action)
        .bind(command.timestamp.unwrap_or_else(Utc::now))
        .bind(&command.origin_ip)
        .fetch_one(&pool)
        .await?;

    AuditRecorder::new(pool)
        .record_create(EntityKind::LogAcesso, &entry.user, &entry)
        .await;

    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::validate_actor;
    use crate::audit::{query_audit_records, AuditFilter};
    use crate::features::shared::test_helpers::*;

    fn command(user: &str) -> CreateAccessLogCommand {
        CreateAccessLogCommand {
            user: user.to_string(),
            action: "Login".to_string(),
            timestamp: None,
            origin_ip: "2001:0db8:85a3:0000:0000:8a2e:0370:7334".to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert!(command("gerente1").validate().is_ok());
        assert!(command(" ").validate().is_err());

        let mut long_ip = command("gerente1");
        long_ip.origin_ip = "1".repeat(ORIGIN_IP_MAX_LENGTH + 1);
        assert!(long_ip.validate().is_err());
    }

    #[tokio::test]
    async fn test_new_user_becomes_known_and_is_the_actor() {
        let pool = test_pool().await;
        assert!(!validate_actor(&pool, "novato").await.unwrap());

        let entry = handle(pool.clone(), command("novato")).await.unwrap();
        assert_eq!(entry.user, "novato");
        assert!(validate_actor(&pool, "novato").await.unwrap());

        let records = query_audit_records(&pool, &AuditFilter::default()).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entity, "LogAcesso");
        assert_eq!(records[0].actor, "novato");
    }
}
