//! Configuration types for the Flurry API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`FlurryConfig`]: The configuration struct holding credentials and client settings
//! - [`FlurryConfigBuilder`]: A builder for constructing [`FlurryConfig`] instances
//! - [`ApiAccessCode`]: A validated account access code
//! - [`ApiKey`]: A validated application API key with masked debug output
//! - [`HostUrl`]: A validated base URL for the reporting API
//! - [`ReportDate`]: A `YYYY-MM-DD` date as sent to the API
//!
//! # Example
//!
//! ```rust
//! use flurry_api::{FlurryConfig, ApiAccessCode, ApiKey};
//!
//! let config = FlurryConfig::builder()
//!     .access_code(ApiAccessCode::new("my-access-code").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .max_retries(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 5);
//! ```

mod newtypes;
mod report_date;

pub use newtypes::{ApiAccessCode, ApiKey, HostUrl};
pub use report_date::{ReportDate, DATE_FORMAT};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the reporting API.
pub const DEFAULT_API_HOST: &str = "http://api.flurry.com";

/// Default number of retries after a provider-reported error.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Pause before every request. The API allows one request per second per account.
pub const DEFAULT_RATE_LIMIT_INTERVAL: Duration = Duration::from_secs(1);

/// Configuration for the Flurry API client.
///
/// # Thread Safety
///
/// `FlurryConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use flurry_api::{FlurryConfig, ApiAccessCode, ApiKey, HostUrl};
///
/// let config = FlurryConfig::builder()
///     .access_code(ApiAccessCode::new("code").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .api_host(HostUrl::new("http://localhost:8080").unwrap())
///     .rate_limit_interval(Duration::from_millis(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_host().as_ref(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug)]
pub struct FlurryConfig {
    access_code: ApiAccessCode,
    api_key: ApiKey,
    max_retries: u32,
    api_host: HostUrl,
    rate_limit_interval: Duration,
    user_agent_prefix: Option<String>,
}

impl FlurryConfig {
    /// Creates a new builder for constructing a `FlurryConfig`.
    #[must_use]
    pub fn builder() -> FlurryConfigBuilder {
        FlurryConfigBuilder::new()
    }

    /// Returns the account access code.
    #[must_use]
    pub const fn access_code(&self) -> &ApiAccessCode {
        &self.access_code
    }

    /// Returns the application API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns how many times a request is retried after a provider error.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the base URL of the reporting API.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the pause taken before every request.
    #[must_use]
    pub const fn rate_limit_interval(&self) -> Duration {
        self.rate_limit_interval
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify FlurryConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlurryConfig>();
};

/// Builder for constructing [`FlurryConfig`] instances.
///
/// Required fields are `access_code` and `api_key`.
///
/// # Defaults
///
/// - `max_retries`: 3
/// - `api_host`: `http://api.flurry.com`
/// - `rate_limit_interval`: 1 second
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct FlurryConfigBuilder {
    access_code: Option<ApiAccessCode>,
    api_key: Option<ApiKey>,
    max_retries: Option<u32>,
    api_host: Option<HostUrl>,
    rate_limit_interval: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl FlurryConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account access code (required).
    #[must_use]
    pub fn access_code(mut self, code: ApiAccessCode) -> Self {
        self.access_code = Some(code);
        self
    }

    /// Sets the application API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets how many times a request is retried after a provider error.
    ///
    /// A request is attempted at most `max_retries + 1` times.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Overrides the base URL of the reporting API.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the pause taken before every request.
    #[must_use]
    pub const fn rate_limit_interval(mut self, interval: Duration) -> Self {
        self.rate_limit_interval = Some(interval);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`FlurryConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_code` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<FlurryConfig, ConfigError> {
        let access_code = self.access_code.ok_or(ConfigError::MissingRequiredField {
            field: "access_code",
        })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let api_host = match self.api_host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_API_HOST)?,
        };

        Ok(FlurryConfig {
            access_code,
            api_key,
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            api_host,
            rate_limit_interval: self
                .rate_limit_interval
                .unwrap_or(DEFAULT_RATE_LIMIT_INTERVAL),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
