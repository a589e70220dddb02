//! `forno-auth`: identity, session lifecycle and the access guard.
//!
//! This crate is decoupled from any UI and from concrete storage: the
//! session store talks to a [`forno_core::KeyValueStore`].

pub mod credentials;
pub mod error;
pub mod guard;
pub mod roles;
pub mod seed;
pub mod session;
pub mod user;

pub use credentials::Credentials;
pub use error::LoginError;
pub use guard::{AccessDecision, DenialReason, SessionState, check_access, check_user};
pub use roles::Role;
pub use session::{PASSWORDS_KEY, SESSION_KEY, SessionStore, USERS_KEY};
pub use user::User;
