use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forno_core::{CustomerId, Entity, TenantId};

use crate::scope::TenantOwned;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub zip_code: String,
    pub is_default: bool,
}

/// Customer record kept by one pizzeria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub tenant_id: TenantId,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub addresses: Vec<Address>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

impl TenantOwned for Customer {
    fn owner_tenant(&self) -> Option<&TenantId> {
        Some(&self.tenant_id)
    }
}
