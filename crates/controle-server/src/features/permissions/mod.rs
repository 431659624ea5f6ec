//! Permissions, audited as entity kind `Permissao`

pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::permissions_routes;
pub use types::Permission;
