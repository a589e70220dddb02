//! Tenant scoping: which slice of a record collection an actor may see.
//!
//! An actor without a tenant reference (the platform super admin) sees every
//! record; any other actor sees exactly the records owned by its tenant.

use forno_core::TenantId;

/// A record that belongs to (at most) one tenant.
pub trait TenantOwned {
    /// Tenant that owns the record, used purely as a filter key.
    fn owner_tenant(&self) -> Option<&TenantId>;
}

/// Visibility scope of an actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantScope {
    /// Full visibility across every tenant.
    All,
    /// Only records whose tenant equals this one.
    Tenant(TenantId),
}

impl TenantScope {
    /// Derive the scope from an actor's (optional) tenant reference.
    pub fn for_actor(tenant_id: Option<&TenantId>) -> Self {
        match tenant_id {
            Some(id) => Self::Tenant(id.clone()),
            None => Self::All,
        }
    }

    /// Whether a single record is visible in this scope.
    pub fn admits<T: TenantOwned + ?Sized>(&self, record: &T) -> bool {
        match self {
            Self::All => true,
            Self::Tenant(id) => record.owner_tenant() == Some(id),
        }
    }

    /// Borrowing view over the visible records, in their original order.
    ///
    /// The yielded references borrow only `records`, not the scope.
    pub fn filter<'s, 'a, T: TenantOwned>(
        &'s self,
        records: &'a [T],
    ) -> impl Iterator<Item = &'a T> + use<'s, 'a, T> {
        records.iter().filter(move |record| self.admits(*record))
    }

    /// Owning form: `All` hands the collection back untouched.
    pub fn apply<T: TenantOwned>(&self, records: Vec<T>) -> Vec<T> {
        match self {
            Self::All => records,
            Self::Tenant(_) => records.into_iter().filter(|r| self.admits(r)).collect(),
        }
    }
}
