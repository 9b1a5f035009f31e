//! Auth token persistence in localStorage.
//!
//! The bearer token is the only state the dashboard keeps across reloads.

use super::dom;
use crate::config::AUTH_TOKEN_KEY;
use crate::core::error::StorageError;

/// Stored bearer token, if any.
pub fn auth_token() -> Option<String> {
    dom::local_storage()?.get_item(AUTH_TOKEN_KEY).ok()?
}

pub fn set_auth_token(token: &str) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    storage
        .set_item(AUTH_TOKEN_KEY, token)
        .map_err(|_| StorageError::SaveFailed)
}

pub fn clear_auth_token() -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    storage
        .remove_item(AUTH_TOKEN_KEY)
        .map_err(|_| StorageError::RemoveFailed)
}
