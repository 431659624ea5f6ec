//! Error-to-response helpers shared by the feature API error types
//!
//! # Examples
//!
//! ```rust,ignore
//! use controle_server::features::shared::error_helpers::actor_error_response;
//!
//! CreatePolicyError::Actor(e) => actor_error_response(e, "policy creation"),
//! ```

use axum::{http::StatusCode, response::Response};

use crate::actor::ActorError;
use crate::api::response::{codes, database_error_response, ErrorResponse};

/// 400 response for a request whose fields failed validation
pub fn validation_error_response(message: impl Into<String>) -> Response {
    ErrorResponse::new(codes::VALIDATION_ERROR, message).into_response_with(StatusCode::BAD_REQUEST)
}

/// 404 response naming the missing record
pub fn not_found_response(message: impl Into<String>) -> Response {
    ErrorResponse::new(codes::NOT_FOUND, message).into_response_with(StatusCode::NOT_FOUND)
}

/// Map an actor check failure: unknown actors are a client error, a failed
/// lookup is a store failure
pub fn actor_error_response(error: &ActorError, context: &str) -> Response {
    match error {
        ActorError::Unknown(name) => ErrorResponse::new(
            codes::INVALID_ACTOR,
            format!("User '{}' not found. Use a valid user from the access logs.", name),
        )
        .into_response_with(StatusCode::BAD_REQUEST),
        ActorError::Database(e) => database_error_response(context, e),
    }
}
