//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Flurry API access code.
///
/// There is one access code per Flurry account. It is sent as the
/// `apiAccessCode` query parameter on every request.
///
/// # Example
///
/// ```rust
/// use flurry_api::ApiAccessCode;
///
/// let code = ApiAccessCode::new("ACCESS-CODE").unwrap();
/// assert_eq!(code.as_ref(), "ACCESS-CODE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiAccessCode(String);

impl ApiAccessCode {
    /// Creates a new validated access code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessCode`] if the code is empty.
    pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ConfigError::EmptyAccessCode);
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for ApiAccessCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Flurry application API key.
///
/// There is one API key per application. The `Debug` implementation masks
/// the value, displaying only `ApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use flurry_api::ApiKey;
///
/// let key = ApiKey::new("my-app-key").unwrap();
/// assert_eq!(key.as_ref(), "my-app-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for the reporting API.
///
/// Only `http` and `https` URLs with a non-empty authority are accepted.
/// Trailing slashes are stripped so endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use flurry_api::HostUrl;
///
/// let url = HostUrl::new("http://api.flurry.com/").unwrap();
/// assert_eq!(url.as_ref(), "http://api.flurry.com");
/// assert!(HostUrl::new("ftp://api.flurry.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the scheme is not `http` or
    /// `https`, or nothing follows it.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/');

        let authority = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));
        match authority {
            Some(rest) if !rest.is_empty() && !rest.starts_with(':') => Ok(Self(url.to_string())),
            _ => Err(ConfigError::InvalidHostUrl {
                url: url.to_string(),
            }),
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
