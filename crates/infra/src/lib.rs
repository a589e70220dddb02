//! Infrastructure layer: storage adapters and configuration.

pub mod config;
pub mod storage;

pub use config::{ConfigError, StorageBackend, StorageConfig, open_store};
pub use storage::{ConfiguredStore, FileKeyValueStore, InMemoryKeyValueStore};
