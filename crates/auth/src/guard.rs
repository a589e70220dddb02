//! Access guard for protected views.
//!
//! - No IO
//! - No panics
//! - Deterministic: same session state and requirement, same decision

use serde::Serialize;

use crate::{Role, User};

/// Resolution state of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Persisted session not yet restored.
    #[default]
    Pending,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending)
    }
}

/// Why an authenticated actor was sent to the unauthorized view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    WrongRole,
    Inactive,
    MissingTenant,
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Loading,
    RedirectLogin,
    RedirectUnauthorized(DenialReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Decide whether the current session may open a view requiring `required`.
///
/// Checks run in a fixed order and the first match wins:
/// pending → loading; anonymous → login; super admin → allow; wrong role,
/// inactive, staff without tenant → unauthorized; otherwise allow.
pub fn check_access(session: &SessionState, required: Option<Role>) -> AccessDecision {
    match session {
        SessionState::Pending => AccessDecision::Loading,
        SessionState::Anonymous => AccessDecision::RedirectLogin,
        SessionState::Authenticated(user) => check_user(user, required),
    }
}

/// Guard for an already-resolved actor.
pub fn check_user(user: &User, required: Option<Role>) -> AccessDecision {
    // Super admin bypasses role, activity and tenant checks.
    if user.is_super_admin() {
        return AccessDecision::Allow;
    }

    let denial = if required.is_some_and(|role| role != user.role) {
        Some(DenialReason::WrongRole)
    } else if !user.is_active {
        Some(DenialReason::Inactive)
    } else if user.is_missing_tenant() {
        Some(DenialReason::MissingTenant)
    } else {
        None
    };

    match denial {
        Some(reason) => {
            tracing::debug!(
                user_id = %user.id,
                role = %user.role,
                required = ?required,
                ?reason,
                "access denied"
            );
            AccessDecision::RedirectUnauthorized(reason)
        }
        None => AccessDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forno_core::TenantId;
    use proptest::prelude::*;

    fn user(role: Role, tenant: Option<&'static str>, active: bool) -> User {
        let tenant = tenant.map(TenantId::from_static);
        let mut user = User::new("t@forno.test", "Test", role, tenant, Utc::now());
        user.is_active = active;
        user
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    #[test]
    fn pending_session_is_loading() {
        assert_eq!(check_access(&SessionState::Pending, None), AccessDecision::Loading);
        assert_eq!(
            check_access(&SessionState::Pending, Some(Role::SuperAdmin)),
            AccessDecision::Loading
        );
    }

    #[test]
    fn anonymous_goes_to_login() {
        assert_eq!(check_access(&SessionState::Anonymous, None), AccessDecision::RedirectLogin);
    }

    #[test]
    fn wrong_role_takes_precedence_over_inactive() {
        let inactive_attendant = user(Role::Attendant, Some("tenant-1"), false);
        assert_eq!(
            check_user(&inactive_attendant, Some(Role::Admin)),
            AccessDecision::RedirectUnauthorized(DenialReason::WrongRole)
        );
        assert_eq!(
            check_user(&inactive_attendant, Some(Role::Attendant)),
            AccessDecision::RedirectUnauthorized(DenialReason::Inactive)
        );
    }

    #[test]
    fn inactive_takes_precedence_over_missing_tenant() {
        let orphan = user(Role::Admin, None, false);
        assert_eq!(
            check_user(&orphan, None),
            AccessDecision::RedirectUnauthorized(DenialReason::Inactive)
        );
    }

    #[test]
    fn staff_with_tenant_is_allowed() {
        let admin = user(Role::Admin, Some("tenant-1"), true);
        assert!(check_user(&admin, None).is_allowed());
        assert!(check_user(&admin, Some(Role::Admin)).is_allowed());
        assert_eq!(
            check_user(&admin, Some(Role::SuperAdmin)),
            AccessDecision::RedirectUnauthorized(DenialReason::WrongRole)
        );
    }

    #[test]
    fn inactive_super_admin_still_passes() {
        let boss = user(Role::SuperAdmin, None, false);
        let session = SessionState::Authenticated(boss);
        assert!(check_access(&session, Some(Role::Attendant)).is_allowed());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a super admin is allowed for every requirement,
        /// regardless of its flags.
        #[test]
        fn super_admin_always_allowed(
            required in prop::option::of(role_strategy()),
            active in any::<bool>(),
            with_tenant in any::<bool>(),
        ) {
            let boss = user(Role::SuperAdmin, with_tenant.then_some("tenant-1"), active);
            prop_assert_eq!(check_user(&boss, required), AccessDecision::Allow);
        }

        /// Property: an active admin without a tenant is always turned away,
        /// even when its role matches the requirement.
        #[test]
        fn admin_without_tenant_never_allowed(
            required in prop::option::of(role_strategy()),
        ) {
            let orphan = user(Role::Admin, None, true);
            let decision = check_user(&orphan, required);
            prop_assert!(matches!(decision, AccessDecision::RedirectUnauthorized(_)));
            if required.is_none() || required == Some(Role::Admin) {
                prop_assert_eq!(
                    decision,
                    AccessDecision::RedirectUnauthorized(DenialReason::MissingTenant)
                );
            }
        }

        /// Property: allowed staff always hold the required role (if any), are
        /// active and carry a tenant.
        #[test]
        fn allowed_staff_satisfy_every_check(
            role in prop::sample::select(vec![Role::Admin, Role::Attendant]),
            required in prop::option::of(role_strategy()),
            active in any::<bool>(),
            with_tenant in any::<bool>(),
        ) {
            let staff = user(role, with_tenant.then_some("tenant-2"), active);
            if check_user(&staff, required).is_allowed() {
                prop_assert!(required.is_none_or(|r| r == role));
                prop_assert!(active);
                prop_assert!(with_tenant);
            }
        }
    }
}
