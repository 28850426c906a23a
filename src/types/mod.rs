//! Data model for records fetched from the console API.
//!
//! Tag sets (tenant roles, group roles, policy actions) are closed enums and
//! are validated when the JSON is deserialized. Optional collections on a
//! user (`groups`, `policies`) read as empty when absent.

mod group;
mod role;
mod user;

pub use group::{Bot, Group, Template};
pub use role::{GroupRole, PolicyAction, Role};
pub use user::{GroupMembership, User, UserPolicy};
