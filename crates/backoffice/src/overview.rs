//! Super-admin console: platform totals and user search.

use serde::Serialize;

use forno_auth::User;
use forno_core::entity::find_by_id;
use forno_tenancy::Tenant;

/// Platform-wide totals shown on the super-admin overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformOverview {
    pub tenant_count: usize,
    pub active_tenants: usize,
    pub user_count: usize,
    pub active_users: usize,
    /// Share of active users, rounded to the nearest percent (0 with no users).
    pub active_user_percent: u32,
    /// Sum of the tenants' estimated monthly revenue, in cents.
    pub total_monthly_revenue: u64,
}

impl PlatformOverview {
    pub fn compute(tenants: &[Tenant], users: &[User]) -> Self {
        let user_count = users.len();
        let active_users = users.iter().filter(|u| u.is_active).count();
        let active_user_percent = if user_count == 0 {
            0
        } else {
            // Round half up.
            ((active_users * 100 + user_count / 2) / user_count) as u32
        };

        Self {
            tenant_count: tenants.len(),
            active_tenants: tenants.iter().filter(|t| t.is_active).count(),
            user_count,
            active_users,
            active_user_percent,
            total_monthly_revenue: tenants.iter().map(|t| t.monthly_revenue).sum(),
        }
    }
}

/// Users whose name, email or tenant name contains `term`, ignoring case.
/// The term is matched as typed, surrounding whitespace included; an empty
/// term matches everyone.
pub fn search_users<'a>(users: &'a [User], tenants: &[Tenant], term: &str) -> Vec<&'a User> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return users.iter().collect();
    }

    users
        .iter()
        .filter(|user| {
            let tenant_name = user
                .tenant_id
                .as_ref()
                .and_then(|id| find_by_id(tenants, id))
                .map(|t| t.name.to_lowercase());

            user.display_name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
                || tenant_name.is_some_and(|name| name.contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use forno_auth::seed;

    #[test]
    fn seeded_overview() {
        let overview = PlatformOverview::compute(&forno_tenancy::seed::tenants(), &seed::users());

        assert_eq!(overview.tenant_count, 2);
        assert_eq!(overview.active_tenants, 1);
        assert_eq!(overview.user_count, 5);
        assert_eq!(overview.active_users, 4);
        assert_eq!(overview.active_user_percent, 80);
        assert_eq!(overview.total_monthly_revenue, 1_245_000);
    }

    #[test]
    fn empty_platform_has_zero_percent() {
        let overview = PlatformOverview::compute(&[], &[]);
        assert_eq!(overview.active_user_percent, 0);
    }

    #[test]
    fn percent_rounds_half_up() {
        let mut users = seed::users();
        users.truncate(2);
        users[1].is_active = false;
        users.push(users[1].clone());
        // 1 of 3 active → 33%; 2 of 3 → 67%.
        assert_eq!(PlatformOverview::compute(&[], &users).active_user_percent, 33);
        users[2].is_active = true;
        assert_eq!(PlatformOverview::compute(&[], &users).active_user_percent, 67);
    }

    #[test]
    fn search_matches_name_email_and_tenant_name() {
        let users = seed::users();
        let tenants = forno_tenancy::seed::tenants();

        let by_tenant = search_users(&users, &tenants, "EXPRESS");
        assert_eq!(by_tenant.len(), 2);

        let by_name: Vec<&str> = search_users(&users, &tenants, "maria")
            .into_iter()
            .map(|u| u.email.as_str())
            .collect();
        assert_eq!(by_name, vec!["bellavista@atendente.com"]);

        assert_eq!(search_users(&users, &tenants, "bella vista").len(), 2);
        assert_eq!(search_users(&users, &tenants, "").len(), users.len());
        assert!(search_users(&users, &tenants, " maria").is_empty());
        assert!(search_users(&users, &tenants, "zzz").is_empty());
    }
}
