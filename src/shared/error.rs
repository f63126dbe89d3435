//! Shared Error Types
//!
//! This module defines the error type used by the contact store, the route
//! loaders and the router. Loader failures travel back to the UI thread as
//! values of this type and are rendered by the detail pane's error boundary.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON seed file parsing failures
//! - `ValidationError` - Malformed input (bad locations, bad config values)
//! - `NotFound` - A contact id that does not exist
//! - `StoreError` - The contact store could not serve the request
//!
//! # Usage
//!
//! ```rust
//! use xfcontacts::shared::error::ContactsError;
//!
//! let error = ContactsError::not_found("7");
//! assert!(error.to_string().contains("7"));
//! ```
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ContactsError>;

/// Errors raised by the contact store, the loaders and the router
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactsError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Requested contact does not exist
    #[error("Contact not found: {id}")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// The backing store failed
    #[error("Store error: {message}")]
    StoreError {
        /// Human-readable error message
        message: String,
    },
}

impl ContactsError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a new store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for ContactsError {
    fn from(err: url::ParseError) -> Self {
        Self::validation("location", err.to_string())
    }
}

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::store(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ContactsError::validation("initial_url", "must start with '/'");
        match error {
            ContactsError::ValidationError { field, message } => {
                assert_eq!(field, "initial_url");
                assert_eq!(message, "must start with '/'");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_not_found_display() {
        let error = ContactsError::not_found("abc");
        assert_eq!(error.to_string(), "Contact not found: abc");
    }

    #[test]
    fn test_from_serde_error() {
        let result: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope }");
        let error: ContactsError = result.unwrap_err().into();
        match error {
            ContactsError::SerializationError { message } => {
                assert!(message.starts_with("JSON error"));
            }
            _ => panic!("Expected SerializationError from serde error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing seed");
        let error: ContactsError = io.into();
        assert!(matches!(error, ContactsError::StoreError { .. }));
        assert!(error.to_string().contains("missing seed"));
    }
}
