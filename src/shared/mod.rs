//! Shared Module
//!
//! Platform-agnostic types used by the router, the contact store and the egui
//! views: the contact record, in-app locations, errors and configuration.

/// Contact data structure
pub mod contact;

/// In-app URL handling
pub mod location;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use contact::Contact;
pub use location::{Location, SEARCH_PARAM};
pub use error::{ContactsError, Result};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
