//! Permission API routes
//!
//! - `POST /api/permissoes` - Create a permission
//! - `GET /api/permissoes` - List permissions
//! - `GET /api/permissoes/:id` - Get a single permission
//! - `DELETE /api/permissoes/:id` - Delete a permission
//!
//! Permissions have no update endpoint.

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
        CreatePermissionCommand, CreatePermissionError, DeletePermissionCommand,
        DeletePermissionError,
    },
    queries::{GetPermissionError, GetPermissionQuery, ListPermissionsError, ListPermissionsQuery},
};

pub fn permissions_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_permissions).post(create_permission))
        .route("/:id", get(get_permission).delete(delete_permission))
}

/// Create a permission
///
/// - `201 Created` - Permission created
/// - `400 Bad Request` - Validation error (level outside 1..=5) or unknown actor
#[tracing::instrument(skip(pool, command), fields(actor = %actor))]
async fn create_permission(
    State(pool): State<SqlitePool>,
    actor: Actor,
    Json(mut command): Json<CreatePermissionCommand>,
) -> Result<Response, PermissionApiError> {
    command.actor = actor;

    let permission = super::commands::create::handle(pool, command).await?;

    tracing::info!(permission_id = permission.id, "Permission created via API");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(permission))).into_response())
}

/// Delete a permission
///
/// - `204 No Content` - Permission deleted
/// - `400 Bad Request` - Unknown actor
/// - `404 Not Found` - Permission not found
#[tracing::instrument(skip(pool), fields(id = id, actor = %actor))]
async fn delete_permission(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    actor: Actor,
) -> Result<Response, PermissionApiError> {
    super::commands::delete::handle(pool, DeletePermissionCommand { id, actor }).await?;

    tracing::info!(permission_id = id, "Permission deleted via API");

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_permission(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, PermissionApiError> {
    let permission = super::queries::get::handle(pool, GetPermissionQuery { id }).await?;
    Ok(ApiResponse::success(permission).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_permissions(State(pool): State<SqlitePool>) -> Result<Response, PermissionApiError> {
    let permissions =
        super::queries::list::handle(pool, ListPermissionsQuery::default()).await?;
    Ok(ApiResponse::success(permissions).into_response())
}

#[derive(Debug)]
enum PermissionApiError {
    Create(CreatePermissionError),
    Delete(DeletePermissionError),
    Get(GetPermissionError),
    List(ListPermissionsError),
}

impl From<CreatePermissionError> for PermissionApiError {
    fn from(err: CreatePermissionError) -> Self {
        Self::Create(err)
    }
}

impl From<DeletePermissionError> for PermissionApiError {
    fn from(err: DeletePermissionError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetPermissionError> for PermissionApiError {
    fn from(err: GetPermissionError) -> Self {
        Self::Get(err)
    }
}

impl From<ListPermissionsError> for PermissionApiError {
    fn from(err: ListPermissionsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for PermissionApiError {
    fn into_response(self) -> Response {
        match self {
            PermissionApiError::Create(CreatePermissionError::Validation(e)) => {
                validation_error_response(e.to_string())
            },
            PermissionApiError::Create(CreatePermissionError::Actor(e)) => {
                actor_error_response(&e, "permission creation")
            },
            PermissionApiError::Create(CreatePermissionError::Database(e)) => {
                database_error_response("permission creation", &e)
            },

            PermissionApiError::Delete(DeletePermissionError::Actor(e)) => {
                actor_error_response(&e, "permission deletion")
            },
            PermissionApiError::Delete(ref e @ DeletePermissionError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            PermissionApiError::Delete(DeletePermissionError::Database(e)) => {
                database_error_response("permission deletion", &e)
            },

            PermissionApiError::Get(ref e @ GetPermissionError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            PermissionApiError::Get(GetPermissionError::Database(e)) => {
                database_error_response("permission lookup", &e)
            },

            PermissionApiError::List(ListPermissionsError::Database(e)) => {
                database_error_response("permission listing", &e)
            },
        }
    }
}
