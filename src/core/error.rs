//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`LoginError`] - Login form validation
//! - [`PageError`] - Pagination requests outside the available range
//! - [`ApiError`] - HTTP requests made through the API client
//! - [`StorageError`] - localStorage access

use thiserror::Error;

/// Login form validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Email or password left blank.
    #[error("Please enter both email and password.")]
    MissingCredentials,
}

/// Pagination errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// Requested page is 0 or past the last page.
    #[error("page {page} is out of range (1..={total_pages})")]
    OutOfRange { page: usize, total_pages: usize },
}

/// Errors returned by the API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Failed to build the request (bad header, body encoding, ...)
    #[error("Failed to create request: {0}")]
    RequestCreationFailed(String),
    /// Server answered 401; the session must sign in again.
    #[error("Unauthorized")]
    Unauthorized,
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Network request failed (CORS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Request was aborted after the configured timeout.
    #[error("Request timed out")]
    Timeout,
    /// Response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to write to localStorage.
    #[error("failed to save to localStorage")]
    SaveFailed,
    /// Failed to remove from localStorage.
    #[error("failed to remove from localStorage")]
    RemoveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LoginError::MissingCredentials.to_string(),
            "Please enter both email and password."
        );
        assert_eq!(
            PageError::OutOfRange {
                page: 4,
                total_pages: 3,
            }
            .to_string(),
            "page 4 is out of range (1..=3)"
        );
        assert_eq!(ApiError::HttpError(503).to_string(), "HTTP error: 503");
        assert_eq!(ApiError::Timeout.to_string(), "Request timed out");
    }
}
