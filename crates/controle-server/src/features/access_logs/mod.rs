//! Access log, audited as entity kind `LogAcesso`
//!
//! Also the source of known users for actor validation.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::{access_logs_routes, users_routes};
pub use types::AccessLogEntry;
