pub mod get;
pub mod list;

pub use get::{GetPolicyError, GetPolicyQuery};
pub use list::{ListPoliciesError, ListPoliciesQuery};
