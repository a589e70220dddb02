//! Session store: the current actor plus the user and password collections.
//!
//! One `SessionStore` owns the storage adapter and is passed by reference to
//! whatever needs the current user. A mutation persists all the entries it
//! touches as one unit before updating the in-memory state. If any write
//! fails, the entries already written get their previous contents back, so a
//! failed mutation leaves both memory and storage as they were.

use chrono::{DateTime, Utc};

use forno_core::entity::{find_by_id, remove_by_id, replace_by_id};
use forno_core::{JsonStoreExt, KeyValueStore, StoreError, UserId, encode_json};

use crate::guard::SessionState;
use crate::{Credentials, LoginError, User, seed};

/// Storage key of the logged-in user record.
pub const SESSION_KEY: &str = "user";
/// Storage key of the full user list.
pub const USERS_KEY: &str = "systemUsers";
/// Storage key of the email → password map.
pub const PASSWORDS_KEY: &str = "systemPasswords";

/// Pending change to one persisted entry: `Some` writes it, `None` removes it.
type Change = (&'static str, Option<String>);

#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    users: Vec<User>,
    credentials: Credentials,
    state: SessionState,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Read users and passwords (falling back to the demo accounts) without
    /// resolving the persisted session: the state stays `Pending`.
    pub fn load(mut storage: S) -> Result<Self, StoreError> {
        let users = match storage.read_json::<Vec<User>>(USERS_KEY)? {
            Some(users) => users,
            None => {
                let users = seed::users();
                storage.write_json(USERS_KEY, &users)?;
                tracing::info!(count = users.len(), "seeded user list");
                users
            }
        };

        let credentials = match storage.read_json::<Credentials>(PASSWORDS_KEY)? {
            Some(credentials) => credentials,
            None => {
                let credentials = seed::credentials();
                storage.write_json(PASSWORDS_KEY, &credentials)?;
                credentials
            }
        };

        Ok(Self {
            storage,
            users,
            credentials,
            state: SessionState::Pending,
        })
    }

    /// [`load`](Self::load) followed by [`restore`](Self::restore).
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let mut store = Self::load(storage)?;
        store.restore()?;
        Ok(store)
    }

    /// Resolve the persisted session against the current user list.
    ///
    /// A session whose user was removed or deactivated (or that cannot be
    /// decoded) is dropped silently and the actor becomes anonymous.
    pub fn restore(&mut self) -> Result<(), StoreError> {
        let persisted = match self.storage.read_json::<User>(SESSION_KEY) {
            Ok(persisted) => persisted,
            Err(err @ StoreError::Decode { .. }) => {
                tracing::warn!(error = %err, "discarding unreadable persisted session");
                return self.discard_session();
            }
            Err(err) => return Err(err),
        };

        let Some(persisted) = persisted else {
            self.state = SessionState::Anonymous;
            return Ok(());
        };

        // Trust the user list, not the stale copy stored with the session.
        let current = find_by_id(&self.users, &persisted.id)
            .filter(|u| u.is_active)
            .cloned();
        match current {
            Some(current) => {
                tracing::info!(user_id = %current.id, "session restored");
                self.state = SessionState::Authenticated(current);
                Ok(())
            }
            None => {
                tracing::warn!(
                    user_id = %persisted.id,
                    "discarding session of missing or inactive user"
                );
                self.discard_session()
            }
        }
    }

    fn discard_session(&mut self) -> Result<(), StoreError> {
        self.storage.remove(SESSION_KEY)?;
        self.state = SessionState::Anonymous;
        Ok(())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn find_user(&self, id: &UserId) -> Option<&User> {
        find_by_id(&self.users, id)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User, LoginError> {
        self.login_at(email, password, Utc::now())
    }

    /// Log in, stamping `now` as the user's last login.
    pub fn login_at(
        &mut self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<User, LoginError> {
        let mut user = match self.authenticate(email, password) {
            Ok(user) => user.clone(),
            Err(err) => {
                tracing::warn!(email, error = %err, "login rejected");
                return Err(err);
            }
        };
        user.last_login = Some(now);

        let mut users = self.users.clone();
        replace_by_id(&mut users, user.clone());
        self.persist(vec![
            (USERS_KEY, Some(encode_json(USERS_KEY, &users)?)),
            (SESSION_KEY, Some(encode_json(SESSION_KEY, &user)?)),
        ])?;

        self.users = users;
        self.state = SessionState::Authenticated(user.clone());
        tracing::info!(user_id = %user.id, role = %user.role, "login succeeded");
        Ok(user)
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<&User, LoginError> {
        let user = self
            .users
            .iter()
            .find(|u| u.email == email)
            .ok_or(LoginError::UserNotFound)?;

        if !user.is_active {
            return Err(LoginError::UserInactive);
        }
        if !self.credentials.verify(email, password) {
            return Err(LoginError::BadCredentials);
        }
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.storage.remove(SESSION_KEY)?;
        if let Some(user) = self.state.user() {
            tracing::info!(user_id = %user.id, "logged out");
        }
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// Append a user and record its password.
    pub fn add_user(&mut self, user: User, password: impl Into<String>) -> Result<(), StoreError> {
        let mut credentials = self.credentials.clone();
        credentials.set(user.email.clone(), password);
        let user_id = user.id.clone();
        let role = user.role;
        let mut users = self.users.clone();
        users.push(user);

        self.persist(vec![
            (USERS_KEY, Some(encode_json(USERS_KEY, &users)?)),
            (PASSWORDS_KEY, Some(encode_json(PASSWORDS_KEY, &credentials)?)),
        ])?;
        self.users = users;
        self.credentials = credentials;
        tracing::info!(%user_id, %role, "user added");
        Ok(())
    }

    /// Replace the user with the same id. Returns `false` if there is none.
    ///
    /// Refreshes the session when the logged-in user is updated, and carries
    /// the password over when the email changes.
    pub fn update_user(&mut self, user: User) -> Result<bool, StoreError> {
        let mut users = self.users.clone();
        let Some(previous) = replace_by_id(&mut users, user.clone()) else {
            return Ok(false);
        };

        let mut credentials = self.credentials.clone();
        let mut changes = Vec::with_capacity(3);
        if previous.email != user.email {
            credentials.rename(&previous.email, &user.email);
            changes.push((PASSWORDS_KEY, Some(encode_json(PASSWORDS_KEY, &credentials)?)));
        }
        changes.push((USERS_KEY, Some(encode_json(USERS_KEY, &users)?)));
        let is_current = self.current_user().is_some_and(|u| u.id == user.id);
        if is_current {
            changes.push((SESSION_KEY, Some(encode_json(SESSION_KEY, &user)?)));
        }
        self.persist(changes)?;

        self.users = users;
        self.credentials = credentials;
        tracing::info!(user_id = %user.id, "user updated");
        if is_current {
            self.state = SessionState::Authenticated(user);
        }
        Ok(true)
    }

    /// Remove a user and its password; logs out if it is the current user.
    pub fn remove_user(&mut self, id: &UserId) -> Result<Option<User>, StoreError> {
        let mut users = self.users.clone();
        let Some(removed) = remove_by_id(&mut users, id) else {
            return Ok(None);
        };
        let mut credentials = self.credentials.clone();
        credentials.remove(&removed.email);

        let mut changes = vec![
            (USERS_KEY, Some(encode_json(USERS_KEY, &users)?)),
            (PASSWORDS_KEY, Some(encode_json(PASSWORDS_KEY, &credentials)?)),
        ];
        let is_current = self.current_user().is_some_and(|u| &u.id == id);
        if is_current {
            changes.push((SESSION_KEY, None));
        }
        self.persist(changes)?;

        self.users = users;
        self.credentials = credentials;
        tracing::info!(user_id = %id, "user removed");
        if is_current {
            tracing::info!(user_id = %id, "logged out");
            self.state = SessionState::Anonymous;
        }
        Ok(Some(removed))
    }

    /// Apply `changes` in order as one unit. On the first failure, the entries
    /// already changed are put back before the error is returned.
    fn persist(&mut self, changes: Vec<Change>) -> Result<(), StoreError> {
        let mut applied: Vec<Change> = Vec::with_capacity(changes.len());
        for (key, next) in changes {
            let outcome = self
                .storage
                .get(key)
                .and_then(|previous| apply_change(&mut self.storage, key, next).map(|()| previous));
            match outcome {
                Ok(previous) => applied.push((key, previous)),
                Err(err) => {
                    self.roll_back(applied);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn roll_back(&mut self, applied: Vec<Change>) {
        for (key, previous) in applied.into_iter().rev() {
            if let Err(err) = apply_change(&mut self.storage, key, previous) {
                tracing::error!(key, error = %err, "failed to restore persisted entry");
            }
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn apply_change<S: KeyValueStore>(
    storage: &mut S,
    key: &str,
    value: Option<String>,
) -> Result<(), StoreError> {
    match value {
        Some(raw) => storage.set(key, raw),
        None => storage.remove(key),
    }
}
