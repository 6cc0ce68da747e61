//! HTTP client for the Flurry reporting API.
//!
//! This module provides the [`HttpClient`] type, which executes
//! [`MetricRequest`]s with rate limiting and bounded retries.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::clients::errors::{HttpError, ProviderError, TransportError};
use crate::clients::http_request::MetricRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiAccessCode, ApiKey, FlurryConfig};

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the reporting API.
///
/// The client handles:
/// - URL construction from the configured host, API family and metric name
/// - Credential injection into the query string
/// - A fixed pause before every attempt (the API allows 1 request/second)
/// - Bounded retries when the API answers with an error envelope
///
/// Requests are issued strictly one at a time by the caller; the client
/// never spawns background work.
///
/// # Example
///
/// ```rust,ignore
/// use flurry_api::clients::{ApiFamily, HttpClient, MetricRequest};
///
/// let client = HttpClient::new(&config)?;
/// let request = MetricRequest::builder(ApiFamily::AppMetrics, "ActiveUsers")
///     .start_date(ReportDate::new("2013-05-14")?)
///     .build();
///
/// let body = client.execute(&request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `http://api.flurry.com`).
    base_uri: String,
    access_code: ApiAccessCode,
    api_key: ApiKey,
    max_retries: u32,
    rate_limit_interval: Duration,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::ClientBuild`] if the underlying reqwest
    /// client cannot be created.
    pub fn new(config: &FlurryConfig) -> Result<Self, TransportError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Flurry API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(TransportError::ClientBuild)?;

        Ok(Self {
            client,
            base_uri: config.api_host().as_ref().to_string(),
            access_code: config.access_code().clone(),
            api_key: config.api_key().clone(),
            max_retries: config.max_retries(),
            rate_limit_interval: config.rate_limit_interval(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the number of retries after a provider error.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the account access code.
    #[must_use]
    pub const fn access_code(&self) -> &ApiAccessCode {
        &self.access_code
    }

    /// Returns the application API key currently in use.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Replaces the application API key. The access code and retry bound are
    /// left untouched.
    pub fn rotate_api_key(&mut self, api_key: ApiKey) {
        tracing::debug!("Rotating Flurry API key");
        self.api_key = api_key;
    }

    /// Returns the full URL of a request, without its query string.
    #[must_use]
    pub fn url_for(&self, request: &MetricRequest) -> String {
        format!("{}/{}", self.base_uri, request.path())
    }

    /// Executes a request and returns the decoded body.
    ///
    /// Every attempt is preceded by the rate-limit pause. A body carrying an
    /// error envelope is retried up to `max_retries` times, so at most
    /// `max_retries + 1` attempts are made.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request cannot be sent or the body is not JSON (`Transport`)
    /// - Every attempt returned an error envelope (`Provider`)
    pub async fn execute(&self, request: &MetricRequest) -> Result<Value, HttpError> {
        let url = self.url_for(request);
        let query = request.query(&self.access_code, &self.api_key);

        let mut tries: u32 = 0;
        loop {
            tries += 1;
            tokio::time::sleep(self.rate_limit_interval).await;

            tracing::debug!(
                "Requesting {} (attempt {} of {})",
                url,
                tries,
                self.max_retries.saturating_add(1)
            );

            let response = self.send(&url, &query).await?;

            let Some(error) = response.provider_error() else {
                return Ok(response.into_body());
            };

            if tries > self.max_retries {
                return Err(HttpError::Provider(ProviderError {
                    code: error.code,
                    message: error.message,
                    tries,
                }));
            }

            tracing::warn!(
                "Flurry returned error {} - '{}' for {} (HTTP {}), retrying",
                error.code,
                error.message,
                request.path(),
                response.status
            );
        }
    }

    /// Performs one GET and decodes the body, whatever the status code.
    async fn send<Q: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<HttpResponse, TransportError> {
        let mut req_builder = self.client.get(url).query(query);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let body_text = res.text().await?;

        let body = serde_json::from_str(&body_text)
            .map_err(|source| TransportError::InvalidJson {
                source,
                body: body_text,
            })?;

        Ok(HttpResponse::new(status, body))
    }
}
