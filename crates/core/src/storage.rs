//! Local key/value storage port.
//!
//! The back-office keeps its durable state in a handful of string entries
//! (JSON documents). Adapters live in the infra crate; domain crates only see
//! this trait.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage adapter failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value for '{key}' is not valid JSON: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

/// Synchronous string key/value store.
///
/// Writes take `&mut self`: the store has exactly one owner and every
/// mutation happens inside a single user-triggered event.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Typed JSON access on top of any [`KeyValueStore`].
pub trait JsonStoreExt: KeyValueStore {
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.get(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StoreError::Decode {
                    key: key.to_string(),
                    source,
                }),
        }
    }

    fn write_json<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let raw = encode_json(key, value)?;
        self.set(key, raw)
    }
}

impl<S: KeyValueStore + ?Sized> JsonStoreExt for S {}

/// Encode `value` as the JSON document stored under `key`.
pub fn encode_json<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })
}
