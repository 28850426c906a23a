//! Advisory permission checks over already-loaded user data.
//!
//! These gate what the console offers (enabled buttons, visible controls).
//! The API enforces the same rules on its side.

use tracing::debug;

use crate::traits::PolicyTarget;
use crate::types::{GroupRole, Role, User};

/// Whether `user` administers the whole tenant.
pub fn is_tenant_admin(user: &User) -> bool {
    user.has_role(Role::Admin)
}

/// Whether `user` may administer group `group_id`.
///
/// Tenant admins administer every group. Anyone else needs a membership in
/// that group with the group-admin role.
pub fn is_group_admin(user: &User, group_id: i64) -> bool {
    let allowed = is_tenant_admin(user)
        || user
            .groups()
            .iter()
            .find(|membership| membership.id == group_id)
            .is_some_and(|membership| membership.group_role == GroupRole::GroupAdmin);

    debug!(
        event = "Permission",
        phase = "GroupAdmin",
        user = user.id,
        group = group_id,
        allowed
    );
    allowed
}

/// Whether `user` may modify `resource`.
///
/// Tenant admins may modify anything. Anyone else needs a `write` or `all`
/// policy on that resource. A user without policies may modify nothing.
pub fn has_write_policy<T: PolicyTarget + ?Sized>(resource: &T, user: &User) -> bool {
    let target = resource.target_id();
    let allowed = is_tenant_admin(user)
        || user
            .policies()
            .iter()
            .any(|policy| policy.action.grants_write() && policy.bot_id == target);

    debug!(
        event = "Permission",
        phase = "Write",
        user = user.id,
        target,
        allowed
    );
    allowed
}
