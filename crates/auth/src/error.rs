use thiserror::Error;

use forno_core::StoreError;

/// Why a login attempt was rejected. Every variant leaves state untouched.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("user not found")]
    UserNotFound,

    #[error("user is inactive; contact the administrator")]
    UserInactive,

    #[error("incorrect password")]
    BadCredentials,

    #[error(transparent)]
    Storage(#[from] StoreError),
}
