//! Role and visibility filters for list views.
//!
//! The role filter is not a generic multi-select: which users it keeps is
//! decided by which of the two role tags are selected, per [`RoleBucket`].
//! Selecting nothing yields the users without any role, while the status
//! filter yields nothing for an empty selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::error::ConsoleError;
use crate::traits::PublicFlag;
use crate::types::{Role, User};

/// The set of users a role selection resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoleBucket {
    /// Users holding no role at all.
    Unassigned,
    /// Users holding `admin`, whatever else they hold.
    Admins,
    /// Users holding `user` but not `admin`.
    UsersOnly,
    /// Everyone, unfiltered.
    Everyone,
}

impl RoleBucket {
    /// Look up the bucket for `(admin selected, user selected)`.
    pub fn from_selection(admin_selected: bool, user_selected: bool) -> Self {
        match (admin_selected, user_selected) {
            (false, false) => RoleBucket::Unassigned,
            (true, false) => RoleBucket::Admins,
            (false, true) => RoleBucket::UsersOnly,
            (true, true) => RoleBucket::Everyone,
        }
    }

    pub fn for_roles(selected: &[Role]) -> Self {
        Self::from_selection(selected.contains(&Role::Admin), selected.contains(&Role::User))
    }

    /// Whether `user` belongs in this bucket.
    pub fn admits(&self, user: &User) -> bool {
        match self {
            RoleBucket::Unassigned => user.roles.is_empty(),
            RoleBucket::Admins => user.has_role(Role::Admin),
            RoleBucket::UsersOnly => user.has_role(Role::User) && !user.has_role(Role::Admin),
            RoleBucket::Everyone => true,
        }
    }
}

/// Keep the users matching the selected role filters, in original order.
pub fn filter_user_by_role<'a>(users: &'a [User], selected: &[Role]) -> Vec<&'a User> {
    let bucket = RoleBucket::for_roles(selected);
    let kept: Vec<&User> = users.iter().filter(|u| bucket.admits(u)).collect();

    debug!(
        event = "RoleFilter",
        phase = "Filtered",
        bucket = ?bucket,
        total = users.len(),
        kept = kept.len()
    );
    kept
}

/// Parse raw role filter values (e.g. from a query string).
pub fn parse_role_query<I, S>(values: I) -> Result<Vec<Role>, ConsoleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| {
            let v = v.as_ref();
            Role::from_str(v).map_err(|_| ConsoleError::InvalidRole(v.to_string()))
        })
        .collect()
}

/// Keep the items whose `"true"`/`"false"` public tag is listed in `query`.
/// An empty query keeps nothing.
pub fn filter_by_public_status<'a, T, S>(items: &'a [T], query: &[S]) -> Vec<&'a T>
where
    T: PublicFlag,
    S: AsRef<str>,
{
    let kept: Vec<&T> = items
        .iter()
        .filter(|item| query.iter().any(|q| q.as_ref() == item.public_tag()))
        .collect();

    debug!(
        event = "StatusFilter",
        phase = "Filtered",
        total = items.len(),
        kept = kept.len()
    );
    kept
}
