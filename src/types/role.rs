//! Closed tag sets for tenant roles, group roles and policy actions.
//!
//! The API delivers these as lowercase snake_case strings. Anything outside
//! the known set is rejected when the record is deserialized, so the
//! predicates downstream only ever see valid tags.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// A tenant-level role tag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    /// Tenant administrator.
    Admin,
    User,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

/// A role held inside a single group.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GroupRole {
    GroupAdmin,
    GroupMember,
}

impl GroupRole {
    pub fn label(&self) -> &'static str {
        match self {
            GroupRole::GroupAdmin => "Group Admin",
            GroupRole::GroupMember => "Group Member",
        }
    }
}

/// What a per-bot policy grants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PolicyAction {
    Read,
    Write,
    /// Read and write.
    All,
}

impl PolicyAction {
    /// Whether this action allows modifying the target.
    pub fn grants_write(&self) -> bool {
        matches!(self, PolicyAction::Write | PolicyAction::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PolicyAction::Read => "Read",
            PolicyAction::Write => "Write",
            PolicyAction::All => "All",
        }
    }
}
