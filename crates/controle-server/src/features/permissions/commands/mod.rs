pub mod create;
pub mod delete;

pub use create::{CreatePermissionCommand, CreatePermissionError};
pub use delete::{DeletePermissionCommand, DeletePermissionError};
