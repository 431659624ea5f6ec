//! Actor resolution and validation
//!
//! The caller names themselves in the `X-Usuario` header. The name is taken at
//! face value, then checked against the users that appear in the access log.
//! This is provenance tracking for the audit trail, not authentication.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

/// Request header carrying the caller's self-declared name
pub const ACTOR_HEADER: &str = "x-usuario";

/// Identity recorded when the caller did not name themselves
pub const SYSTEM_ACTOR: &str = "Sistema";

/// The identity a mutation is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn system() -> Self {
        Self(SYSTEM_ACTOR.to_string())
    }

    pub fn is_system(&self) -> bool {
        self.0 == SYSTEM_ACTOR
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the acting identity from request headers
///
/// A missing header, a value that is not valid UTF-8, or a value that is
/// blank after trimming all resolve to [`SYSTEM_ACTOR`].
pub fn resolve_actor(headers: &HeaderMap) -> Actor {
    headers
        .get(ACTOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Actor::new)
        .unwrap_or_default()
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(resolve_actor(&parts.headers))
    }
}

/// Errors raised when checking an actor against the access log
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("User '{0}' is not a known user")]
    Unknown(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Whether `name` appears as a user in at least one access-log entry
///
/// The match is exact and case-sensitive. A blank name is never known.
pub async fn validate_actor(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
    if name.trim().is_empty() {
        return Ok(false);
    }

    let exists: i64 =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM access_logs WHERE user_name = ?)")
            .bind(name)
            .fetch_one(pool)
            .await?;

    Ok(exists != 0)
}

/// Reject actors that are neither the system identity nor a known user
#[tracing::instrument(skip(pool), fields(actor = %actor))]
pub async fn ensure_known_actor(pool: &SqlitePool, actor: &Actor) -> Result<(), ActorError> {
    if actor.is_system() {
        return Ok(());
    }

    if validate_actor(pool, actor.as_str()).await? {
        debug!("Actor validated");
        Ok(())
    } else {
        Err(ActorError::Unknown(actor.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Utc;

    use crate::db::in_memory_pool;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACTOR_HEADER, HeaderValue::from_str(value).unwrap());
        headers
    }

    async fn insert_log_user(pool: &SqlitePool, user: &str) {
        sqlx::query(
            "INSERT INTO access_logs (user_name, action, timestamp, origin_ip) VALUES (?, 'Login', ?, '10.0.0.1')",
        )
        .bind(user)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
    }

    #[test]
    fn test_resolve_missing_header_is_system() {
        assert_eq!(resolve_actor(&HeaderMap::new()), Actor::system());
    }

    #[test]
    fn test_resolve_blank_header_is_system() {
        assert!(resolve_actor(&headers_with("")).is_system());
        assert!(resolve_actor(&headers_with("   ")).is_system());
        assert!(resolve_actor(&headers_with("\t ")).is_system());
    }

    #[test]
    fn test_resolve_trims_value() {
        assert_eq!(resolve_actor(&headers_with("  admin ")).as_str(), "admin");
    }

    #[test]
    fn test_resolve_header_name_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Usuario", HeaderValue::from_static("auditor1"));
        assert_eq!(resolve_actor(&headers).as_str(), "auditor1");
    }

    #[test]
    fn test_resolve_non_utf8_is_system() {
        let mut headers = HeaderMap::new();
        headers.insert(ACTOR_HEADER, HeaderValue::from_bytes(&[0xC3, 0x28]).unwrap());
        assert!(resolve_actor(&headers).is_system());
    }

    #[test]
    fn test_actor_serializes_as_plain_string() {
        let json = serde_json::to_string(&Actor::new("dev1")).unwrap();
        assert_eq!(json, r#""dev1""#);
    }

    #[tokio::test]
    async fn test_validate_known_and_unknown() {
        let pool = in_memory_pool().await.unwrap();
        insert_log_user(&pool, "admin").await;

        assert!(validate_actor(&pool, "admin").await.unwrap());
        assert!(!validate_actor(&pool, "Admin").await.unwrap());
        assert!(!validate_actor(&pool, "ghost").await.unwrap());
        assert!(!validate_actor(&pool, "  ").await.unwrap());
    }

    #[tokio::test]
    async fn test_ensure_known_actor_skips_system() {
        let pool = in_memory_pool().await.unwrap();
        assert!(ensure_known_actor(&pool, &Actor::system()).await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_known_actor_rejects_unknown() {
        let pool = in_memory_pool().await.unwrap();
        let result = ensure_known_actor(&pool, &Actor::new("ghost")).await;
        assert!(matches!(result, Err(ActorError::Unknown(name)) if name == "ghost"));
    }
}
