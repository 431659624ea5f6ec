//! Internal-control policies
//!
//! Every write is attributed to an actor and recorded in the audit trail as
//! entity kind `Politica`.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::policies_routes;
pub use types::Policy;
