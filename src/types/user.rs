//! Users with their tenant roles, group memberships and bot policies.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::role::{GroupRole, PolicyAction, Role};

/// Membership of a user in one group.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct GroupMembership {
    /// The group identifier.
    pub id: i64,
    pub group_role: GroupRole,
}

/// A per-bot access grant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct UserPolicy {
    pub action: PolicyAction,
    pub bot_id: i64,
}

/// A tenant user as delivered by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupMembership>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<UserPolicy>>,
}

impl User {
    /// Create a user with the given roles and no memberships or policies.
    pub fn new<N: Into<String>, E: Into<String>>(
        id: i64,
        name: N,
        email: E,
        roles: Vec<Role>,
    ) -> Self {
        User {
            id,
            name: name.into(),
            email: email.into(),
            roles,
            groups: None,
            policies: None,
        }
    }

    pub fn with_groups(mut self, groups: Vec<GroupMembership>) -> Self {
        self.groups = Some(groups);
        self
    }

    pub fn with_policies(mut self, policies: Vec<UserPolicy>) -> Self {
        self.policies = Some(policies);
        self
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Group memberships; absent reads as empty.
    pub fn groups(&self) -> &[GroupMembership] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// Bot policies; absent reads as empty.
    pub fn policies(&self) -> &[UserPolicy] {
        self.policies.as_deref().unwrap_or_default()
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
