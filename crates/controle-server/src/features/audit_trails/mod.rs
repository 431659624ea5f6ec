//! Audit trail browsing and administration
//!
//! Records are written by [`crate::audit::AuditRecorder`]; this slice exposes
//! them over HTTP.

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::audit_trails_routes;
