//! Storage configuration, read from the environment.
//!
//! - `FORNO_STORAGE`: `memory` (default) or `file`
//! - `FORNO_DATA_DIR`: directory for the `file` backend (default `./forno-data`)

use std::path::PathBuf;

use anyhow::Context;
use thiserror::Error;

use crate::storage::{ConfiguredStore, FileKeyValueStore, InMemoryKeyValueStore};

pub const STORAGE_ENV: &str = "FORNO_STORAGE";
pub const DATA_DIR_ENV: &str = "FORNO_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "./forno-data";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown storage backend '{0}' (expected 'memory' or 'file')")]
    UnknownBackend(String),
}

impl core::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source (tests pass a closure
    /// instead of mutating the process environment).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup(STORAGE_ENV) {
            Some(raw) => raw.parse()?,
            None => StorageBackend::default(),
        };
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(Self { backend, data_dir })
    }
}

/// Open the storage adapter described by `config`.
pub fn open_store(config: &StorageConfig) -> anyhow::Result<ConfiguredStore> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; state will not survive restarts");
            Ok(ConfiguredStore::Memory(InMemoryKeyValueStore::new()))
        }
        StorageBackend::File => {
            let store = FileKeyValueStore::open(&config.data_dir).with_context(|| {
                format!("failed to open data directory at {:?}", config.data_dir)
            })?;
            tracing::info!(dir = %config.data_dir.display(), "using file storage");
            Ok(ConfiguredStore::File(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_to_memory() {
        let config = StorageConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorageConfig::default());
    }

    #[test]
    fn reads_file_backend_and_dir() {
        let vars = [(STORAGE_ENV, "File"), (DATA_DIR_ENV, "/tmp/forno")];
        let config = StorageConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/forno"));
    }

    #[test]
    fn rejects_unknown_backend() {
        let err = StorageConfig::from_lookup(lookup(&[(STORAGE_ENV, "redis")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownBackend("redis".to_string()));
    }

    #[test]
    fn opens_file_store_in_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: dir.path().join("nested"),
        };
        let store = open_store(&config).unwrap();
        assert!(matches!(store, ConfiguredStore::File(_)));
        assert!(dir.path().join("nested").is_dir());
    }
}
