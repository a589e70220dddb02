//! `forno-tenancy`: tenants, their records and tenant scoping.
//!
//! Pure domain logic: no IO, no storage. Orders and customers carry a tenant
//! reference that is used only to decide visibility.

pub mod book;
pub mod customer;
pub mod directory;
pub mod order;
pub mod scope;
pub mod seed;
pub mod tenant;

pub use book::OrderBook;
pub use customer::{Address, Customer};
pub use directory::TenantDirectory;
pub use order::{Order, OrderItem, OrderStatus};
pub use scope::{TenantOwned, TenantScope};
pub use tenant::{DayHours, DeliveryArea, NewTenant, Tenant, TenantSettings, WorkingHours, slugify};
