//! `forno-core`: domain foundation building blocks.
//!
//! This crate contains identifiers, the domain error model, entity helpers
//! and the storage port. No adapters live here.

pub mod entity;
pub mod error;
pub mod id;
pub mod storage;

pub use entity::Entity;
pub use error::DomainError;
pub use id::{CustomerId, OrderId, TenantId, UserId};
pub use storage::{JsonStoreExt, KeyValueStore, StoreError, encode_json};
