//! Audit trail API routes
//!
//! - `GET /api/trilhasauditoria?entity=&operation=&actor=` - List records, newest first
//! - `GET /api/trilhasauditoria/:id` - Get a single record
//! - `POST /api/trilhasauditoria` - Administrative insert
//! - `DELETE /api/trilhasauditoria/:id` - Administrative removal
//!
//! There is no update route: audit records are immutable.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::api::response::{database_error_response, ApiResponse};
use crate::features::shared::error_helpers::{not_found_response, validation_error_response};

use super::{
    commands::{
        CreateAuditTrailCommand, CreateAuditTrailError, DeleteAuditTrailCommand,
        DeleteAuditTrailError,
    },
    queries::{GetAuditTrailError, GetAuditTrailQuery, ListAuditTrailsError, ListAuditTrailsQuery},
};

pub fn audit_trails_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_audit_trails).post(create_audit_trail))
        .route("/:id", get(get_audit_trail).delete(delete_audit_trail))
}

/// Insert an audit record by hand
///
/// - `201 Created` - Record stored
/// - `400 Bad Request` - Missing fields, unknown operation, or snapshots that
///   do not match the operation
#[tracing::instrument(skip(pool, command), fields(entity = %command.entity, operation = %command.operation))]
async fn create_audit_trail(
    State(pool): State<SqlitePool>,
    Json(command): Json<CreateAuditTrailCommand>,
) -> Result<Response, AuditTrailApiError> {
    let record = super::commands::create::handle(pool, command).await?;

    tracing::warn!(audit_id = record.id, "Audit record inserted manually");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(record))).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_audit_trail(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, AuditTrailApiError> {
    super::commands::delete::handle(pool, DeleteAuditTrailCommand { id }).await?;

    tracing::warn!(audit_id = id, "Audit record removed");

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_audit_trail(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Response, AuditTrailApiError> {
    let record = super::queries::get::handle(pool, GetAuditTrailQuery { id }).await?;
    Ok(ApiResponse::success(record).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_audit_trails(
    State(pool): State<SqlitePool>,
    Query(query): Query<ListAuditTrailsQuery>,
) -> Result<Response, AuditTrailApiError> {
    let records = super::queries::list::handle(pool, query).await?;

    let meta = json!({ "count": records.len() });

    Ok(ApiResponse::success_with_meta(records, meta).into_response())
}

#[derive(Debug)]
enum AuditTrailApiError {
    Create(CreateAuditTrailError),
    Delete(DeleteAuditTrailError),
    Get(GetAuditTrailError),
    List(ListAuditTrailsError),
}

impl From<CreateAuditTrailError> for AuditTrailApiError {
    fn from(err: CreateAuditTrailError) -> Self {
        Self::Create(err)
    }
}

impl From<DeleteAuditTrailError> for AuditTrailApiError {
    fn from(err: DeleteAuditTrailError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetAuditTrailError> for AuditTrailApiError {
    fn from(err: GetAuditTrailError) -> Self {
        Self::Get(err)
    }
}

impl From<ListAuditTrailsError> for AuditTrailApiError {
    fn from(err: ListAuditTrailsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for AuditTrailApiError {
    fn into_response(self) -> Response {
        match self {
            AuditTrailApiError::Create(CreateAuditTrailError::Database(e)) => {
                database_error_response("audit record insert", &e)
            },
            AuditTrailApiError::Create(e) => validation_error_response(e.to_string()),

            AuditTrailApiError::Delete(ref e @ DeleteAuditTrailError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            AuditTrailApiError::Delete(DeleteAuditTrailError::Database(e)) => {
                database_error_response("audit record removal", &e)
            },

            AuditTrailApiError::Get(ref e @ GetAuditTrailError::NotFound(_)) => {
                not_found_response(e.to_string())
            },
            AuditTrailApiError::Get(GetAuditTrailError::Database(e)) => {
                database_error_response("audit record lookup", &e)
            },

            AuditTrailApiError::List(ListAuditTrailsError::Operation(e)) => {
                validation_error_response(e.to_string())
            },
            AuditTrailApiError::List(ListAuditTrailsError::Database(e)) => {
                database_error_response("audit record listing", &e)
            },
        }
    }
}
