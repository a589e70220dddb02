//! `forno-backoffice`: the pizzeria back-office shell.
//!
//! Wires the session store, tenant directory and order book together and
//! exposes route navigation plus tenant-scoped data views.

pub mod app;
pub mod overview;
pub mod route;

pub use app::Backoffice;
pub use overview::{PlatformOverview, search_users};
pub use route::{Access, Navigation, Route, navigate};
