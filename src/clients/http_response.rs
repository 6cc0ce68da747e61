//! Response types for the Flurry reporting API.
//!
//! The API signals failure only through the body: an object carrying a
//! `code` field. The HTTP status is kept for logging and never consulted.

use serde_json::Value;

/// The error envelope of a failed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderErrorBody {
    /// The error code reported by the API.
    pub code: i64,
    /// The error message reported by the API, empty when absent.
    pub message: String,
}

/// A decoded response from the reporting API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The decoded response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns the error envelope if the body is an object with a `code` field.
    ///
    /// Codes sent as floats or numeric strings are truncated to integers; any
    /// other code is reported as `0` so the failure is still detected.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn provider_error(&self) -> Option<ProviderErrorBody> {
        let object = self.body.as_object()?;
        let code = object.get("code")?;

        let code = match code {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or_default(),
            Value::String(s) => s.trim().parse().unwrap_or_default(),
            _ => 0,
        };
        let message = match object.get("message") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Some(ProviderErrorBody { code, message })
    }

    /// Returns `true` if the body does not carry an error envelope.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.provider_error().is_none()
    }

    /// Consumes the response, returning the decoded body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }
}
