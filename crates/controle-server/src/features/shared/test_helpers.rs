//! Test helpers and fixtures for database tests
//!
//! # Examples
//!
//! ```rust,ignore
//! use controle_server::features::shared::test_helpers::*;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let pool = test_pool().await;
//!     TestAccessLog::new("admin").insert(&pool).await;
//!     let policy_id = TestPolicy::new("Senhas").insert(&pool).await;
//!     // ... test logic ...
//! }
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::db::in_memory_pool;

/// Fresh in-memory database with the schema applied
pub async fn test_pool() -> SqlitePool {
    in_memory_pool().await.expect("in-memory pool")
}

/// Builder for creating test policies
#[derive(Debug, Clone)]
pub struct TestPolicy {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl TestPolicy {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("{} description", name),
            active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Insert the policy and return its id
    pub async fn insert(self, pool: &SqlitePool) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO policies (name, description, created_at, active) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&self.name)
        .bind(&self.description)
        .bind(Utc::now())
        .bind(self.active)
        .fetch_one(pool)
        .await
        .expect("insert test policy")
    }
}

/// Builder for creating test permissions
#[derive(Debug, Clone)]
pub struct TestPermission {
    pub name: String,
    pub level: i64,
    pub description: String,
}

impl TestPermission {
    pub fn new(name: &str, level: i64) -> Self {
        Self {
            name: name.to_string(),
            level,
            description: format!("{} description", name),
        }
    }

    /// Insert the permission and return its id
    pub async fn insert(self, pool: &SqlitePool) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO permissions (name, level, description) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&self.name)
        .bind(self.level)
        .bind(&self.description)
        .fetch_one(pool)
        .await
        .expect("insert test permission")
    }
}

/// Builder for creating test access-log entries
///
/// Inserting one is how a test makes a user "known".
#[derive(Debug, Clone)]
pub struct TestAccessLog {
    pub user: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub origin_ip: String,
}

impl TestAccessLog {
    pub fn new(user: &str) -> Self {
        Self {
            user: user.to_string(),
            action: "Login".to_string(),
            timestamp: Utc::now(),
            origin_ip: "192.168.1.10".to_string(),
        }
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = action.to_string();
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Insert the entry and return its id
    pub async fn insert(self, pool: &SqlitePool) -> i64 {
        sqlx::query_scalar(
            "INSERT INTO access_logs (user_name, action, timestamp, origin_ip) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(&self.user)
        .bind(&self.action)
        .bind(self.timestamp)
        .bind(&self.origin_ip)
        .fetch_one(pool)
        .await
        .expect("insert test access log")
    }
}

/// Number of audit records currently stored
pub async fn count_audit_records(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM audit_trails")
        .fetch_one(pool)
        .await
        .expect("count audit records")
}
