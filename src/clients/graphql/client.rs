//! GraphQL client implementation for the Shopify Admin API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! operations against a shop's `graphql.json` endpoint.

use serde::de::DeserializeOwned;

use crate::clients::graphql::response::GraphqlResponse;
use crate::clients::graphql::GraphqlError;
use crate::clients::{HttpClient, HttpResponse};
use crate::config::{AccessToken, ClientConfig, ShopDomain};

/// GraphQL API client for the Shopify Admin API.
///
/// [`query`](Self::query) returns the raw [`HttpResponse`];
/// [`fetch`](Self::fetch) decodes `data` into a caller-supplied type and
/// turns `errors` payloads into [`GraphqlError::Query`].
///
/// # Example
///
/// ```rust,ignore
/// use shopify_publisher::clients::GraphqlClient;
/// use shopify_publisher::{AccessToken, ClientConfig, ShopDomain};
///
/// let client = GraphqlClient::new(
///     &ShopDomain::new("acme")?,
///     &AccessToken::new("shpat_..."),
///     &ClientConfig::default(),
/// )?;
///
/// let shop: serde_json::Value = client.fetch("query { shop { name } }", None).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given shop.
    ///
    /// Requests go to `/admin/api/{version}/graphql.json` on the shop domain,
    /// or on the host override when one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be built.
    pub fn new(
        shop: &ShopDomain,
        access_token: &AccessToken,
        config: &ClientConfig,
    ) -> Result<Self, GraphqlError> {
        let base_path = format!("/admin/api/{}", config.api_version());
        let http_client = HttpClient::new(base_path, shop, access_token, config)?;

        Ok(Self { http_client })
    }

    /// Returns the full endpoint URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.http_client.url_for("graphql.json")
    }

    /// Executes a GraphQL operation and returns the raw response.
    ///
    /// GraphQL-level errors arrive with HTTP 200 and are left in
    /// `response.body["errors"]`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for network errors and non-2xx
    /// responses.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<HttpResponse, GraphqlError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables
        });

        self.http_client
            .post_json("graphql.json", &body)
            .await
            .map_err(Into::into)
    }

    /// Executes a GraphQL operation and decodes its `data` into `T`.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] for transport failures
    /// - [`GraphqlError::Query`] when the response carries `errors`
    /// - [`GraphqlError::MissingData`] when `data` is absent or `null`
    /// - [`GraphqlError::Decode`] when `data` does not match `T`
    pub async fn fetch<T>(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, GraphqlError>
    where
        T: DeserializeOwned,
    {
        let response = self.query(query, variables).await?;
        Self::decode(response.body)
    }

    fn decode<T>(body: serde_json::Value) -> Result<T, GraphqlError>
    where
        T: DeserializeOwned,
    {
        let envelope: GraphqlResponse<serde_json::Value> = serde_json::from_value(body)?;

        if !envelope.errors.is_empty() {
            return Err(GraphqlError::Query {
                errors: envelope.errors,
            });
        }

        let data = envelope.data.ok_or(GraphqlError::MissingData)?;
        serde_json::from_value(data).map_err(Into::into)
    }
}
