//! Access-log API routes
//!
//! - `POST /api/logsacesso` - Record an access (actor is the entry's user)
//! - `GET /api/logsacesso` - List entries, newest first
//! - `GET /api/logsacesso/:id` - Get a single entry
//! - `DELETE /api/logsacesso/:id` - Delete an entry
//! - `GET /api/usuarios` - Distinct known users, sorted

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::SqlitePool;

use crate::actor::Actor;
use crate::api::response::{database_error_response, ApiResponse};
use crate::features::shared::error_helpers::{
    actor_error_response, not_found_response, validation_error_response,
};

use super::{
    commands::{
        CreateAccessLogCommand, CreateAccessLogError, DeleteAccessLogCommand,
        DeleteAccessLogError,
    },
    queries::{
        GetAccessLogError, GetAccessLogQuery, ListAccessLogsError, ListAccessLogsQuery,
        ListUsersError, ListUsersQuery,
    },
};

pub fn access_logs_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_access_logs).post(create_access_log))
        .route("/:id", get(get_access_log).delete(delete_access_log))
}

pub fn users_routes() -> Router<SqlitePool> {
    Router::new().route("/", get(list_users))
}

/// Record an access
///
/// The identity header is ignored; the entry's `user` is the actor.
///
/// - `201 Created` - Entry recorded
/// - `400 Bad Request` - Validation error
#[tracing::instrument(skip(pool, command), fields(user = %command.user))]
async fn create_access_log(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateAccessLogCommand>,
) -> Result<Response, AccessLogApiError> {
    let entry = super::commands::create::handle(pool, command).await?;

    tracing::info!(access_log_id = entry.id, "Access log created via API");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(entry))).into_response())
}

/// Delete an entry
///
/// - `204 No Content` - Entry deleted
/// - `400 Bad Request` - Unknown actor
/// - `404 Not Found` - Entry not found
#[tracing::instrument(skip(pool), fields(id = id, actor = %actor))]
async fn delete_access_log(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    actor: Actor,
) -> Result<Response, AccessLogApiError> {
    super::commands::delete::handle(pool, DeleteAccessLogCommand { id, actor }).await?;

    tracing::info!(access_log_id = id, "Access log deleted via API");

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_access_log(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, AccessLogApiError> {
    let entry = super::queries::get::handle(pool, GetAccessLogQuery { id }).await?;
    Ok(ApiResponse::success(entry).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_access_logs(State(pool): State<SqlitePool>) -> Result<Response, AccessLogApiError> {
    let entries = super::queries::list::handle(pool, ListAccessLogsQuery::default()).await?;
    Ok(ApiResponse::success(entries).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_users(State(pool): State<SqlitePool>) -> Result<Response, AccessLogApiError> {
    let users = super::queries::list_users::handle(pool, ListUsersQuery::default()).await?;
    Ok(ApiResponse::success(users).into_response())
}

#[derive(Debug)]
enum AccessLogApiError {
    Create(CreateAccessLogError),
    Delete(DeleteAccessLogError),
    Get(GetAccessLogError),
    List(ListAccessLogsError),
    ListUsers(ListUsersError),
}

impl From<CreateAccessLogError> for AccessLogApiError {
    fn from(err: CreateAccessLogError) -> Self {
        Self::Create(err)
    }
}

impl From<DeleteAccessLogError> for AccessLogApiError {
    fn from(err: DeleteAccessLogError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetAccessLogError> for AccessLogApiError {
    fn from(err: GetAccessLogError) -> Self {
        Self::Get(err)
    }
}

impl From<ListAccessLogsError> for AccessLogApiError {
    fn from(err: ListAccessLogsError) -> Self {
        Self::List(err)
    }
}

impl From<ListUsersError> for AccessLogApiError {
    fn from(err: ListUsersError) -> Self {
        Self::ListUsers(err)
    }
}

impl IntoResponse for AccessLogApiError {
    fn into_response(self) -> Response {
        match self {
            AccessLogApiError::Create(CreateAccessLogError::Validation(e)) => {
                validation_error_response(e.to_string())
            },
            AccessLogApiError::Create(CreateAccessLogError::Database(e)) => {
                database_error_response("access log creation", &e)
            },

            AccessLogApiError::Delete(DeleteAccessLogError::Actor(e)) => {
                actor_error_response(&e, "access log deletion")
            },
            AccessLogApiError::Delete(ref e @ DeleteAccessLogError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            AccessLogApiError::Delete(DeleteAccessLogError::Database(e)) => {
                database_error_response("access log deletion", &e)
            },

            AccessLogApiError::Get(ref e @ GetAccessLogError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            AccessLogApiError::Get(GetAccessLogError::Database(e)) => {
                database_error_response("access log lookup", &e)
            },

            AccessLogApiError::List(ListAccessLogsError::Database(e)) => {
                database_error_response("access log listing", &e)
            },
            AccessLogApiError::ListUsers(ListUsersError::Database(e)) => {
                database_error_response("user listing", &e)
            },
        }
    }
}
