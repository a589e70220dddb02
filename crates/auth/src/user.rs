//! Back-office user accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forno_core::{Entity, TenantId, UserId};
use forno_tenancy::{TenantOwned, TenantScope};

use crate::Role;

/// A back-office user account.
///
/// # Invariants
/// - `Admin` and `Attendant` carry a tenant reference to be usable.
/// - `SuperAdmin` carries none and sees every tenant.
///
/// Serialized with camelCase keys (`name`, `tenantId`, `isActive`, ...), the
/// layout the persisted user list and session entries use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// A fresh, active account that has never logged in.
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
        tenant_id: Option<TenantId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            display_name: display_name.into(),
            role,
            tenant_id,
            is_active: true,
            created_at,
            last_login: None,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }

    /// Tenant-bound role without a tenant reference.
    pub fn is_missing_tenant(&self) -> bool {
        self.role.requires_tenant() && self.tenant_id.is_none()
    }

    /// Which records this user may see.
    pub fn scope(&self) -> TenantScope {
        TenantScope::for_actor(self.tenant_id.as_ref())
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

impl TenantOwned for User {
    fn owner_tenant(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }
}
