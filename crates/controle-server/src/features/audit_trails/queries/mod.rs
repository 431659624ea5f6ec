pub mod get;
pub mod list;

pub use get::{GetAuditTrailError, GetAuditTrailQuery};
pub use list::{ListAuditTrailsError, ListAuditTrailsQuery};
