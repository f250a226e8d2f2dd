//! HTTP transport for Admin API communication.
//!
//! This module provides the [`HttpClient`] type for sending authenticated
//! JSON requests to a single shop.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::{AccessToken, ClientConfig, ShopDomain};

/// Crate version from Cargo.toml, used in the User-Agent header.
pub const PUBLISHER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// HTTP client bound to one shop and one base path.
///
/// The client handles:
/// - Base URI construction from the shop domain or the configured host override
/// - Default headers including User-Agent and access token
/// - Shopify-specific header inspection (deprecations, call limits)
///
/// Each request is sent once. No retry and no timeout are configured.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://acme.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., "/admin/api/2021-07").
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given shop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be
    /// initialized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_publisher::clients::HttpClient;
    /// use shopify_publisher::{AccessToken, ClientConfig, ShopDomain};
    ///
    /// let shop = ShopDomain::new("acme").unwrap();
    /// let token = AccessToken::new("tok");
    /// let client =
    ///     HttpClient::new("/admin/api/2021-07", &shop, &token, &ClientConfig::default()).unwrap();
    ///
    /// assert_eq!(client.base_uri(), "https://acme.myshopify.com");
    /// ```
    pub fn new(
        base_path: impl Into<String>,
        shop: &ShopDomain,
        access_token: &AccessToken,
        config: &ClientConfig,
    ) -> Result<Self, HttpError> {
        let base_path = base_path.into();

        let base_uri = config.host().map_or_else(
            || format!("https://{}", shop.as_ref()),
            |host| host.as_ref().to_string(),
        );

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Shopify Publisher v{PUBLISHER_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if !access_token.is_empty() {
            default_headers.insert(
                ACCESS_TOKEN_HEADER.to_string(),
                access_token.as_ref().to_string(),
            );
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        tracing::debug!(base_uri = %base_uri, base_path = %base_path, "HTTP client ready");

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL for a path relative to the base path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}/{}", self.base_uri, self.base_path, path)
    }

    /// POSTs a JSON body to `path` (relative to the base path).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] when the request cannot be sent and
    /// [`HttpError::Response`] for any non-2xx status.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(path);

        let mut req_builder = self.client.post(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder
            .header("Content-Type", "application/json")
            .body(body.to_string());

        tracing::debug!(url = %url, "sending request");
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                path,
                reason
            );
        }

        if let Some(limit) = response.api_call_limit {
            tracing::debug!(
                used = limit.request_count,
                bucket = limit.bucket_size,
                "API call limit"
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error fields of a response body into a JSON string.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
