pub mod get;
pub mod list;
pub mod list_users;

pub use get::{GetAccessLogError, GetAccessLogQuery};
pub use list::{ListAccessLogsError, ListAccessLogsQuery};
pub use list_users::{ListUsersError, ListUsersQuery};
