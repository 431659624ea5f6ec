pub mod create;
pub mod delete;

pub use create::{CreateAccessLogCommand, CreateAccessLogError};
pub use delete::{DeleteAccessLogCommand, DeleteAccessLogError};
