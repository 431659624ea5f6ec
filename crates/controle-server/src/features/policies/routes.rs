//! Policy API routes
//!
//! # Route Structure
//!
//! - `POST /api/politicas` - Create a policy
//! - `GET /api/politicas` - List policies
//! - `GET /api/politicas/:id` - Get a single policy
//! - `PUT /api/politicas/:id` - Replace name, description and active flag
//! - `PUT /api/politicas/:id/toggle-status` - Flip the active flag
//! - `DELETE /api/politicas/:id` - Delete a policy
//!
//! Every write names its actor through the `X-Usuario` header.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
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
        CreatePolicyCommand, CreatePolicyError, DeletePolicyCommand, DeletePolicyError,
        TogglePolicyStatusCommand, TogglePolicyStatusError, UpdatePolicyCommand,
        UpdatePolicyError,
    },
    queries::{GetPolicyError, GetPolicyQuery, ListPoliciesError, ListPoliciesQuery},
};

// ============================================================================
// Router Configuration
// ============================================================================

pub fn policies_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_policies).post(create_policy))
        .route(
            "/:id",
            get(get_policy).put(update_policy).delete(delete_policy),
        )
        .route("/:id/toggle-status", put(toggle_policy_status))
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// Create a policy
///
/// # Request Body
///
/// ```json
/// { "name": "Política de Senhas", "description": "Mínimo de 8 caracteres", "active": true }
/// ```
///
/// # Response
///
/// - `201 Created` - Policy created
/// - `400 Bad Request` - Validation error or unknown actor
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(skip(pool, command), fields(actor = %actor))]
async fn create_policy(
    State(pool): State<SqlitePool>,
    actor: Actor,
    Json(mut command): Json<CreatePolicyCommand>,
) -> Result<Response, PolicyApiError> {
    command.actor = actor;

    let policy = super::commands::create::handle(pool, command).await?;

    tracing::info!(policy_id = policy.id, "Policy created via API");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(policy))).into_response())
}

/// Replace a policy's editable fields
///
/// - `200 OK` - Policy updated
/// - `400 Bad Request` - Validation error or unknown actor
/// - `404 Not Found` - Policy not found
#[tracing::instrument(skip(pool, command), fields(id = id, actor = %actor))]
async fn update_policy(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    actor: Actor,
    Json(mut command): Json<UpdatePolicyCommand>,
) -> Result<Response, PolicyApiError> {
    command.id = id;
    command.actor = actor;

    let policy = super::commands::update::handle(pool, command).await?;

    tracing::info!(policy_id = policy.id, "Policy updated via API");

    Ok(ApiResponse::success(policy).into_response())
}

/// Flip a policy between active and inactive
#[tracing::instrument(skip(pool), fields(id = id, actor = %actor))]
async fn toggle_policy_status(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    actor: Actor,
) -> Result<Response, PolicyApiError> {
    let command = TogglePolicyStatusCommand { id, actor };

    let response = super::commands::toggle_status::handle(pool, command).await?;

    tracing::info!(policy_id = response.id, active = response.active, "Policy status toggled via API");

    Ok(ApiResponse::success(response).into_response())
}

/// Delete a policy
///
/// - `204 No Content` - Policy deleted
/// - `400 Bad Request` - Unknown actor
/// - `404 Not Found` - Policy not found
#[tracing::instrument(skip(pool), fields(id = id, actor = %actor))]
async fn delete_policy(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    actor: Actor,
) -> Result<Response, PolicyApiError> {
    let command = DeletePolicyCommand { id, actor };

    super::commands::delete::handle(pool, command).await?;

    tracing::info!(policy_id = id, "Policy deleted via API");

    Ok(StatusCode::NO_CONTENT.into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

#[tracing::instrument(skip(pool))]
async fn get_policy(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, PolicyApiError> {
    let policy = super::queries::get::handle(pool, GetPolicyQuery { id }).await?;
    Ok(ApiResponse::success(policy).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_policies(State(pool): State<SqlitePool>) -> Result<Response, PolicyApiError> {
    let policies = super::queries::list::handle(pool, ListPoliciesQuery::default()).await?;

    tracing::debug!(count = policies.len(), "Policies listed via API");

    Ok(ApiResponse::success(policies).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum PolicyApiError {
    Create(CreatePolicyError),
    Update(UpdatePolicyError),
    ToggleStatus(TogglePolicyStatusError),
    Delete(DeletePolicyError),
    Get(GetPolicyError),
    List(ListPoliciesError),
}

impl From<CreatePolicyError> for PolicyApiError {
    fn from(err: CreatePolicyError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdatePolicyError> for PolicyApiError {
    fn from(err: UpdatePolicyError) -> Self {
        Self::Update(err)
    }
}

impl From<TogglePolicyStatusError> for PolicyApiError {
    fn from(err: TogglePolicyStatusError) -> Self {
        Self::ToggleStatus(err)
    }
}

impl From<DeletePolicyError> for PolicyApiError {
    fn from(err: DeletePolicyError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetPolicyError> for PolicyApiError {
    fn from(err: GetPolicyError) -> Self {
        Self::Get(err)
    }
}

impl From<ListPoliciesError> for PolicyApiError {
    fn from(err: ListPoliciesError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for PolicyApiError {
    fn into_response(self) -> Response {
        match self {
            PolicyApiError::Create(CreatePolicyError::Validation(e)) => {
                validation_error_response(e.to_string())
            },
            PolicyApiError::Create(CreatePolicyError::Actor(e)) => {
                actor_error_response(&e, "policy creation")
            },
            PolicyApiError::Create(CreatePolicyError::Database(e)) => {
                database_error_response("policy creation", &e)
            },

            PolicyApiError::Update(UpdatePolicyError::Validation(e)) => {
                validation_error_response(e.to_string())
            },
            PolicyApiError::Update(UpdatePolicyError::Actor(e)) => {
                actor_error_response(&e, "policy update")
            },
            PolicyApiError::Update(ref e @ UpdatePolicyError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            PolicyApiError::Update(UpdatePolicyError::Database(e)) => {
                database_error_response("policy update", &e)
            },

            PolicyApiError::ToggleStatus(TogglePolicyStatusError::Actor(e)) => {
                actor_error_response(&e, "policy status toggle")
            },
            PolicyApiError::ToggleStatus(ref e @ TogglePolicyStatusError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            PolicyApiError::ToggleStatus(TogglePolicyStatusError::Database(e)) => {
                database_error_response("policy status toggle", &e)
            },

            PolicyApiError::Delete(DeletePolicyError::Actor(e)) => {
                actor_error_response(&e, "policy deletion")
            },
            PolicyApiError::Delete(ref e @ DeletePolicyError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            PolicyApiError::Delete(DeletePolicyError::Database(e)) => {
                database_error_response("policy deletion", &e)
            },

            PolicyApiError::Get(ref e @ GetPolicyError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            PolicyApiError::Get(GetPolicyError::Database(e)) => {
                database_error_response("policy lookup", &e)
            },

            PolicyApiError::List(ListPoliciesError::Database(e)) => {
                database_error_response("policy listing", &e)
            },
        }
    }
}
