//! HTTP response type for Admin API calls.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y" where X is the current request count and Y is
/// the bucket size.
///
/// # Example
///
/// ```rust
/// use shopify_publisher::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("4/40").unwrap();
/// assert_eq!(limit.request_count, 4);
/// assert_eq!(limit.bucket_size, 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The current number of requests made in this bucket.
    pub request_count: u32,
    /// The maximum number of requests allowed in this bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the rate limit header value, returning `None` when malformed.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.split_once('/')?;

        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }
}

/// A response from the Admin API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Rate limit information (from `X-Shopify-Shop-Api-Call-Limit` header).
    pub api_call_limit: Option<ApiCallLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the call-limit header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let api_call_limit = Self::first_header(&headers, "x-shopify-shop-api-call-limit")
            .and_then(ApiCallLimit::parse);

        Self {
            code,
            headers,
            body,
            api_call_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        Self::first_header(&self.headers, "x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        Self::first_header(&self.headers, "x-shopify-api-deprecated-reason")
    }

    fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
        headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(name: &str, value: &str) -> HashMap<String, Vec<String>> {
        HashMap::from([(name.to_string(), vec![value.to_string()])])
    }

    #[test]
    fn test_is_ok_only_for_2xx() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(299, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(401, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(502, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_api_call_limit_parsing() {
        assert_eq!(
            ApiCallLimit::parse("40/80"),
            Some(ApiCallLimit {
                request_count: 40,
                bucket_size: 80
            })
        );
        assert!(ApiCallLimit::parse("invalid").is_none());
        assert!(ApiCallLimit::parse("40/").is_none());
        assert!(ApiCallLimit::parse("abc/def").is_none());
    }

    #[test]
    fn test_api_call_limit_read_from_headers() {
        let response = HttpResponse::new(
            200,
            headers("x-shopify-shop-api-call-limit", "3/40"),
            json!({}),
        );
        assert_eq!(response.api_call_limit.unwrap().request_count, 3);
    }

    #[test]
    fn test_request_id_extraction() {
        let response = HttpResponse::new(200, headers("x-request-id", "abc-123"), json!({}));
        assert_eq!(response.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_deprecation_reason_extraction() {
        let response = HttpResponse::new(
            200,
            headers("x-shopify-api-deprecated-reason", "Version 2021-07 is retired"),
            json!({}),
        );
        assert_eq!(
            response.deprecation_reason(),
            Some("Version 2021-07 is retired")
        );
        assert!(HttpResponse::new(200, HashMap::new(), json!({}))
            .deprecation_reason()
            .is_none());
    }
}
