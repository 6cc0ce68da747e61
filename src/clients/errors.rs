//! HTTP-specific error types for the Flurry API client.
//!
//! # Error Handling
//!
//! - [`TransportError`]: the request could not be completed or its body was not JSON
//! - [`ProviderError`]: the API reported an error on every attempt
//! - [`HttpError`]: Unified error type encompassing both
//!
//! Transport errors are surfaced immediately. Provider errors are retried
//! inside [`HttpClient::execute`](crate::clients::HttpClient::execute) and
//! only reach the caller once the retry budget is spent.
//!
//! # Example
//!
//! ```rust,ignore
//! use flurry_api::clients::HttpError;
//!
//! match client.execute(&request).await {
//!     Ok(body) => println!("Success: {body}"),
//!     Err(HttpError::Provider(e)) => {
//!         println!("Flurry error {}: {} after {} tries", e.code, e.message, e.tries);
//!     }
//!     Err(HttpError::Transport(e)) => println!("Transport failure: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request cannot be completed at the transport level.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded as JSON.
    #[error("Invalid JSON in response body: {source}")]
    InvalidJson {
        /// The decoding error.
        #[source]
        source: serde_json::Error,
        /// The raw body that failed to decode.
        body: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Error returned when the API reported an error on every attempt.
///
/// The `code` and `message` are taken verbatim from the last error body
/// received.
///
/// # Example
///
/// ```rust
/// use flurry_api::clients::ProviderError;
///
/// let error = ProviderError {
///     code: 104,
///     message: "Invalid apiKey".to_string(),
///     tries: 4,
/// };
///
/// assert_eq!(error.to_string(), "104 - 'Invalid apiKey' (after 4 tries)");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{code} - '{message}' (after {tries} tries)")]
pub struct ProviderError {
    /// The error code reported by the API.
    pub code: i64,
    /// The error message reported by the API.
    pub message: String,
    /// The number of attempts made before giving up.
    pub tries: u32,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Transport or decoding failure. Never retried.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Provider-reported failure after all retries.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<reqwest::Error> for HttpError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(TransportError::Network(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_preserves_code_and_message() {
        let error = ProviderError {
            code: 107,
            message: "Too many requests".to_string(),
            tries: 4,
        };
        let message = error.to_string();
        assert!(message.contains("107"));
        assert!(message.contains("Too many requests"));
        assert!(message.contains("4 tries"));
    }

    #[test]
    fn test_invalid_json_error_mentions_decoding() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = TransportError::InvalidJson {
            source,
            body: "<html>".to_string(),
        };
        assert!(error.to_string().starts_with("Invalid JSON in response body"));
    }

    #[test]
    fn test_http_error_is_transparent_over_provider_error() {
        let provider = ProviderError {
            code: 104,
            message: "Invalid apiKey".to_string(),
            tries: 1,
        };
        let expected = provider.to_string();
        let error = HttpError::from(provider);
        assert_eq!(error.to_string(), expected);
        assert!(matches!(error, HttpError::Provider(_)));
    }

    #[test]
    fn test_error_sources() {
        use std::error::Error as _;

        let provider = ProviderError {
            code: 1,
            message: "test".to_string(),
            tries: 1,
        };
        assert!(provider.source().is_none());

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let invalid_json = HttpError::from(TransportError::InvalidJson {
            source,
            body: "{".to_string(),
        });
        assert!(invalid_json.source().is_some());
    }
}
