//! Key/value storage adapters.

mod file;
mod in_memory;

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;

use forno_core::{KeyValueStore, StoreError};

/// Storage adapter selected by configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredStore {
    Memory(InMemoryKeyValueStore),
    File(FileKeyValueStore),
}

impl KeyValueStore for ConfiguredStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            ConfiguredStore::Memory(s) => s.get(key),
            ConfiguredStore::File(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        match self {
            ConfiguredStore::Memory(s) => s.set(key, value),
            ConfiguredStore::File(s) => s.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match self {
            ConfiguredStore::Memory(s) => s.remove(key),
            ConfiguredStore::File(s) => s.remove(key),
        }
    }
}
