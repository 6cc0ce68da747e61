//! Error types for the Flurry API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use flurry_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API access code cannot be empty.
    #[error("API access code cannot be empty. Enable API access in your Flurry account and provide its access code.")]
    EmptyAccessCode,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide the Flurry API key of the application.")]
    EmptyApiKey,

    /// A report date is not a valid calendar date.
    #[error("Invalid report date '{value}'. Expected format: 'YYYY-MM-DD' (e.g., '2013-05-14').")]
    InvalidDate {
        /// The invalid date string that was provided.
        value: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://api.flurry.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
