//! Tenant directory backing the super-admin console.

use chrono::{DateTime, Utc};

use forno_core::entity::{find_by_id, remove_by_id, replace_by_id};
use forno_core::TenantId;

use crate::tenant::{NewTenant, Tenant};

/// In-memory collection of tenants, in registration order.
#[derive(Debug, Clone, Default)]
pub struct TenantDirectory {
    tenants: Vec<Tenant>,
}

impl TenantDirectory {
    pub fn new(tenants: Vec<Tenant>) -> Self {
        Self { tenants }
    }

    pub fn list(&self) -> &[Tenant] {
        &self.tenants
    }

    pub fn get(&self, id: &TenantId) -> Option<&Tenant> {
        find_by_id(&self.tenants, id)
    }

    pub fn active(&self) -> impl Iterator<Item = &Tenant> {
        self.tenants.iter().filter(|t| t.is_active)
    }

    /// Register a tenant from a console draft, assigning a fresh identifier.
    pub fn create(&mut self, draft: NewTenant, now: DateTime<Utc>) -> &Tenant {
        let tenant = draft.into_tenant(TenantId::new(), now);
        tracing::info!(tenant_id = %tenant.id, slug = %tenant.slug, "tenant created");
        self.tenants.push(tenant);
        let last = self.tenants.len() - 1;
        &self.tenants[last]
    }

    /// Replace the tenant with the same identifier. Returns `false` if unknown.
    pub fn update(&mut self, tenant: Tenant) -> bool {
        let id = tenant.id.clone();
        let found = replace_by_id(&mut self.tenants, tenant).is_some();
        tracing::debug!(tenant_id = %id, found, "tenant updated");
        found
    }

    pub fn remove(&mut self, id: &TenantId) -> Option<Tenant> {
        let removed = remove_by_id(&mut self.tenants, id);
        if removed.is_some() {
            tracing::info!(tenant_id = %id, "tenant removed");
        }
        removed
    }
}
