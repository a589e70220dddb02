use serde::{Deserialize, Serialize};

use forno_core::DomainError;

/// Back-office role.
///
/// `SuperAdmin` operates the platform across all tenants; `Admin` and
/// `Attendant` work inside exactly one pizzeria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Attendant,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Attendant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Attendant => "attendant",
        }
    }

    /// Tenant-bound roles are unusable without a tenant reference.
    pub fn requires_tenant(&self) -> bool {
        matches!(self, Role::Admin | Role::Attendant)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown role '{s}'")))
    }
}
