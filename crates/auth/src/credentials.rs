use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Email → password map.
///
/// Passwords are stored in plaintext; this is demo-grade local state, not an
/// authentication system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(BTreeMap<String, String>);

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact comparison against the password recorded for `email`.
    pub fn verify(&self, email: &str, password: &str) -> bool {
        self.0.get(email).is_some_and(|stored| stored == password)
    }

    pub fn set(&mut self, email: impl Into<String>, password: impl Into<String>) {
        self.0.insert(email.into(), password.into());
    }

    pub fn remove(&mut self, email: &str) -> Option<String> {
        self.0.remove(email)
    }

    /// Move the password recorded under `from` to `to` (email change).
    pub fn rename(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        if let Some(password) = self.0.remove(from) {
            self.0.insert(to.to_string(), password);
        }
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.contains_key(email)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
