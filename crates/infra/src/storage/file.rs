use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use forno_core::{KeyValueStore, StoreError};

/// Directory-backed key/value store: one `<key>.json` file per entry.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never observes a half-written document.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open (creating if needed) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(key, path = %path.display(), "stored entry");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = FileKeyValueStore::open(dir.path().join("state")).unwrap();
        store.set("systemPasswords", r#"{"a@b.c":"x"}"#.to_string()).unwrap();
        drop(store);

        let reopened = FileKeyValueStore::open(dir.path().join("state")).unwrap();
        assert_eq!(
            reopened.get("systemPasswords").unwrap().as_deref(),
            Some(r#"{"a@b.c":"x"}"#)
        );
        assert!(reopened.dir().join("systemPasswords.json").exists());
    }

    #[test]
    fn missing_entries_read_as_none_and_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::open(dir.path()).unwrap();

        assert!(store.get("user").unwrap().is_none());
        store.remove("user").unwrap();

        store.set("user", "{}".to_string()).unwrap();
        store.remove("user").unwrap();
        assert!(store.get("user").unwrap().is_none());
    }

    #[test]
    fn path_traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileKeyValueStore::open(dir.path()).unwrap();

        let err = store.set("../escape", String::new()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
    }
}
