pub mod create;
pub mod delete;
pub mod toggle_status;
pub mod update;

pub use create::{CreatePolicyCommand, CreatePolicyError};
pub use delete::{DeletePolicyCommand, DeletePolicyError};
pub use toggle_status::{
    TogglePolicyStatusCommand, TogglePolicyStatusError, TogglePolicyStatusResponse,
};
pub use update::{UpdatePolicyCommand, UpdatePolicyError};
