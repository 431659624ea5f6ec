pub mod create;
pub mod delete;

pub use create::{CreateAuditTrailCommand, CreateAuditTrailError};
pub use delete::{DeleteAuditTrailCommand, DeleteAuditTrailError};
