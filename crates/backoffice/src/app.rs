//! Composition root: session, tenants and order book behind one handle.

use chrono::{DateTime, Utc};

use forno_auth::{SessionStore, User, check_access};
use forno_core::{KeyValueStore, StoreError};
use forno_infra::{ConfiguredStore, StorageConfig, open_store};
use forno_tenancy::{Customer, Order, OrderBook, Tenant, TenantDirectory, TenantScope};

use crate::overview::{PlatformOverview, search_users};
use crate::route::{Navigation, navigate};

pub struct Backoffice<S> {
    session: SessionStore<S>,
    tenants: TenantDirectory,
    book: OrderBook,
}

impl Backoffice<ConfiguredStore> {
    /// Open the storage configured in the environment and restore the session.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = StorageConfig::from_env()?;
        let store = open_store(&config)?;
        let backoffice = Self::open(store, Utc::now())?;

        tracing::info!(
            backend = ?config.backend,
            signed_in = backoffice.current_user().is_some(),
            "back-office ready"
        );
        Ok(backoffice)
    }
}

impl<S: KeyValueStore> Backoffice<S> {
    /// Open the session store and start from the demo tenants and records.
    pub fn open(storage: S, now: DateTime<Utc>) -> Result<Self, StoreError> {
        let session = SessionStore::open(storage)?;
        Ok(Self::from_parts(
            session,
            TenantDirectory::new(forno_tenancy::seed::tenants()),
            OrderBook::new(
                forno_tenancy::seed::orders(now),
                forno_tenancy::seed::customers(now),
            ),
        ))
    }

    pub fn from_parts(session: SessionStore<S>, tenants: TenantDirectory, book: OrderBook) -> Self {
        Self {
            session,
            tenants,
            book,
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore<S> {
        &mut self.session
    }

    pub fn tenants(&self) -> &TenantDirectory {
        &self.tenants
    }

    pub fn tenants_mut(&mut self) -> &mut TenantDirectory {
        &mut self.tenants
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut OrderBook {
        &mut self.book
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// Decide what to show for `path` given the current session.
    pub fn navigate(&self, path: &str) -> Navigation {
        navigate(self.session.state(), path)
    }

    /// Data scope of the current actor.
    ///
    /// `None` unless the actor passes the guard for an ordinary protected
    /// view: anonymous, inactive and tenant-less staff get no data at all.
    pub fn actor_scope(&self) -> Option<TenantScope> {
        if !check_access(self.session.state(), None).is_allowed() {
            return None;
        }
        self.current_user().map(User::scope)
    }

    pub fn visible_orders(&self) -> Vec<&Order> {
        match self.actor_scope() {
            Some(scope) => self.book.orders_for(&scope),
            None => Vec::new(),
        }
    }

    pub fn visible_customers(&self) -> Vec<&Customer> {
        match self.actor_scope() {
            Some(scope) => self.book.customers_for(&scope),
            None => Vec::new(),
        }
    }

    /// The pizzeria the current actor works for, if any.
    pub fn current_tenant(&self) -> Option<&Tenant> {
        let tenant_id = self.current_user()?.tenant_id.as_ref()?;
        self.tenants.get(tenant_id)
    }

    pub fn overview(&self) -> PlatformOverview {
        PlatformOverview::compute(self.tenants.list(), self.session.list_users())
    }

    pub fn search_users(&self, term: &str) -> Vec<&User> {
        search_users(self.session.list_users(), self.tenants.list(), term)
    }
}
