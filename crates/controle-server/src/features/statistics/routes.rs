//! `GET /api/estatisticas` - Record counts across the system

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sqlx::SqlitePool;

use crate::api::response::{database_error_response, ApiResponse};

use super::queries::{GetStatisticsError, GetStatisticsQuery};

pub fn statistics_routes() -> Router<SqlitePool> {
    Router::new().route("/", get(get_statistics))
}

#[tracing::instrument(skip(pool))]
async fn get_statistics(State(pool): State<SqlitePool>) -> Response {
    match super::queries::get::handle(pool, GetStatisticsQuery::default()).await {
        Ok(stats) => ApiResponse::success(stats).into_response(),
        Err(GetStatisticsError::Database(e)) => database_error_response("statistics", &e),
    }
}
