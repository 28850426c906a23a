// src/lib.rs
pub use error::ConsoleError;
pub use permission::{has_write_policy, is_group_admin, is_tenant_admin};
pub use role_filter::{RoleBucket, filter_by_public_status, filter_user_by_role};
pub use sort::{SortOrder, SortValue, get_comparator, sort_rows};
pub use text_match::{QueryMatcher, filter_groups_by_name, filter_test, filter_users_by_name_or_email};
pub use traits::{PolicyTarget, PublicFlag, SortableRow};
pub use types::{Bot, Group, GroupMembership, GroupRole, PolicyAction, Role, Template, User, UserPolicy};

pub mod client;
pub mod display;
mod error;
pub mod permission;
pub mod role_filter;
pub mod sort;
pub mod text_match;
mod traits;
pub mod types;
