//! HTTP client types for Flurry reporting API communication.
//!
//! This module provides the request execution layer: building endpoint URLs
//! and query strings, pausing for the rate limit, decoding JSON bodies and
//! retrying when the API reports an error.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client executing requests
//! - [`MetricRequest`]: A request for one `<apiFamily>/<metricName>` endpoint
//! - [`HttpResponse`]: A decoded response and its error envelope, if any
//! - [`ApiFamily`] / [`GroupBy`]: Endpoint families and time bucketing
//!
//! # Retry Behavior
//!
//! - **Error envelope** (`{"code": .., "message": ..}`): retried up to
//!   `max_retries` times, then surfaced as [`ProviderError`]
//! - **Network failure or non-JSON body**: surfaced immediately as [`TransportError`]
//!
//! Every attempt, retries included, is preceded by the configured
//! rate-limit pause (one second by default).

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, ProviderError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{ApiFamily, GroupBy, MetricRequest, MetricRequestBuilder, QueryParams};
pub use http_response::{HttpResponse, ProviderErrorBody};
