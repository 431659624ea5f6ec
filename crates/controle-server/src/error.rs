//! Server-specific error types

use thiserror::Error;

/// Result type alias for server operations
pub type ServerResult<T> = std::result::Result<T, ServerError>;

/// Errors raised outside the feature slices: pool set-up, migrations, seeding
///
/// Request handlers map their own error enums to responses, so this type never
/// reaches a client.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
