//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the Admin API
//! - [`HttpError`]: every failure the transport can produce
//!
//! Requests are attempted exactly once, so there is no retry-exhaustion
//! variant.

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The message is a compact JSON object holding whichever of `errors`,
/// `error` and `error_description` the response body contained, plus an
/// `error_reference` line when Shopify sent an `X-Request-Id`.
///
/// # Example
///
/// ```rust
/// use shopify_publisher::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Invalid API key or access token"}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("access token"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Unified error type for the HTTP transport.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
