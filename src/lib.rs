//! # Flurry API Rust Client
//!
//! A Rust client for the Flurry analytics reporting API, providing type-safe
//! configuration, rate-limited request execution and helpers for the
//! engagement, event and application endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`FlurryConfig`] and [`FlurryConfigBuilder`]
//! - Validated newtypes for credentials and report dates
//! - Async HTTP client with a fixed pause before every request and bounded
//!   retries on API error envelopes
//! - One operation per reporting endpoint via [`FlurryClient`]
//! - Response normalization into [`metrics::Node`] trees
//! - Composite helpers: all daily metrics, event names, event summaries and
//!   parameter counts
//!
//! ## Quick Start
//!
//! ```rust
//! use flurry_api::{ApiAccessCode, ApiKey, FlurryConfig};
//!
//! let config = FlurryConfig::builder()
//!     .access_code(ApiAccessCode::new("your-access-code").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 3);
//! ```
//!
//! ## Fetching Metrics
//!
//! ```rust,ignore
//! use flurry_api::{FlurryClient, ReportDate};
//! use flurry_api::clients::GroupBy;
//! use flurry_api::metrics::MetricQuery;
//!
//! let client = FlurryClient::new("your-access-code", "your-api-key")?;
//!
//! let query = MetricQuery::new(ReportDate::new("2013-05-01")?)
//!     .end_date(ReportDate::new("2013-05-31")?)
//!     .group_by(GroupBy::Week);
//! let sessions = client.sessions(&query).await?;
//!
//! let counts = client
//!     .counts_for_events_and_parameter(&["Login", "Purchase"], "Level", ReportDate::today(), None)
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Strictly sequential**: Requests are awaited one after another, each
//!   preceded by the rate-limit pause

pub mod clients;
pub mod config;
pub mod error;
pub mod metrics;

// Re-export public types at crate root for convenience
pub use config::{
    ApiAccessCode, ApiKey, FlurryConfig, FlurryConfigBuilder, HostUrl, ReportDate,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiFamily, GroupBy, HttpClient, HttpError, HttpResponse, MetricRequest, ProviderError,
    TransportError,
};

// Re-export metric types
pub use metrics::{FlurryClient, Metric, MetricQuery, MetricsError, ParameterCounts};
