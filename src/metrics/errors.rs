//! Error types for metric operations.
//!
//! - [`MetricsError::Http`]: the request failed (transport or provider)
//! - [`MetricsError::Shape`]: the response was successful but lacked an expected field
//! - [`MetricsError::UnsupportedParameter`] / [`MetricsError::MissingParameter`]:
//!   the query does not fit the metric
//! - [`MetricsError::Config`]: invalid client construction input
//!
//! # Example
//!
//! ```rust,ignore
//! use flurry_api::metrics::MetricsError;
//! use flurry_api::clients::HttpError;
//!
//! match client.all_daily_metrics(date, None, None).await {
//!     Ok(values) => println!("{values:?}"),
//!     Err(MetricsError::Http(HttpError::Provider(e))) => println!("Flurry said no: {e}"),
//!     Err(MetricsError::Shape(e)) => println!("Unexpected response: {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, TransportError};
use crate::error::ConfigError;

/// Error returned when a successful response lacks an expected field.
///
/// # Example
///
/// ```rust
/// use flurry_api::metrics::ShapeError;
///
/// let error = ShapeError::new("day.@value", "expected a scalar");
/// assert_eq!(error.to_string(), "Unexpected response shape at 'day.@value': expected a scalar");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unexpected response shape at '{path}': {reason}")]
pub struct ShapeError {
    /// Where in the response the field was expected.
    pub path: String,
    /// What was expected there.
    pub reason: String,
}

impl ShapeError {
    /// Creates a new shape error.
    #[must_use]
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Error type for metric operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response did not have the expected shape.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// The query carries a parameter the metric does not accept.
    #[error("Metric '{metric}' does not accept the '{parameter}' parameter")]
    UnsupportedParameter {
        /// The metric name.
        metric: &'static str,
        /// The wire name of the rejected parameter.
        parameter: &'static str,
    },

    /// The query lacks a parameter the metric requires.
    #[error("Metric '{metric}' requires the '{parameter}' parameter")]
    MissingParameter {
        /// The metric name.
        metric: &'static str,
        /// The wire name of the missing parameter.
        parameter: &'static str,
    },

    /// Client construction input was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<TransportError> for MetricsError {
    fn from(error: TransportError) -> Self {
        Self::Http(HttpError::Transport(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProviderError;

    #[test]
    fn test_unsupported_parameter_message() {
        let error = MetricsError::UnsupportedParameter {
            metric: "ActiveUsersByWeek",
            parameter: "groupBy",
        };
        assert_eq!(
            error.to_string(),
            "Metric 'ActiveUsersByWeek' does not accept the 'groupBy' parameter"
        );
    }

    #[test]
    fn test_shape_and_provider_errors_are_distinct() {
        let shape = MetricsError::from(ShapeError::new("event", "expected an object or a list"));
        let provider = MetricsError::from(HttpError::from(ProviderError {
            code: 104,
            message: "Invalid apiKey".to_string(),
            tries: 4,
        }));

        assert!(matches!(shape, MetricsError::Shape(_)));
        assert!(matches!(provider, MetricsError::Http(HttpError::Provider(_))));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let error = MetricsError::from(ConfigError::EmptyApiKey);
        assert_eq!(error.to_string(), ConfigError::EmptyApiKey.to_string());
    }
}
