pub mod get;
pub mod list;

pub use get::{GetPermissionError, GetPermissionQuery};
pub use list::{ListPermissionsError, ListPermissionsQuery};
