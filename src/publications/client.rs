//! The three publication operations the publisher performs.

use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::clients::GraphqlClient;
use crate::config::{AccessToken, ClientConfig, ShopDomain};
use crate::publications::queries::{
    ProductPublicationsData, PublicationsData, PublishData, LIST_PRODUCT_PUBLICATIONS,
    LIST_PUBLICATIONS, PRODUCT_PUBLICATIONS_PAGE_SIZE, PUBLICATIONS_PAGE_SIZE, PUBLISH_PRODUCT,
};
use crate::publications::{Gid, Publication, PublicationsError};

/// Lists publications and publishes products for one shop.
///
/// Every method is a single round trip. Failures are returned to the caller
/// unchanged; nothing is retried.
#[derive(Debug)]
pub struct PublicationsClient {
    graphql: GraphqlClient,
}

impl PublicationsClient {
    /// Creates a client for `shop`, authenticated with `access_token`.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationsError::Graphql`] if the transport cannot be
    /// built.
    pub fn new(
        shop: &ShopDomain,
        access_token: &AccessToken,
        config: &ClientConfig,
    ) -> Result<Self, PublicationsError> {
        Ok(Self::from_graphql(GraphqlClient::new(
            shop,
            access_token,
            config,
        )?))
    }

    /// Wraps an existing GraphQL client.
    #[must_use]
    pub const fn from_graphql(graphql: GraphqlClient) -> Self {
        Self { graphql }
    }

    /// Returns the underlying GraphQL client.
    #[must_use]
    pub const fn graphql(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Lists the shop's publications.
    ///
    /// Only the first page of 20 is requested; further publications are
    /// not returned.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationsError::Graphql`] on transport, `errors`
    /// payload or decode failures.
    pub async fn list_publications(&self) -> Result<Vec<Publication>, PublicationsError> {
        let data: PublicationsData = self.graphql.fetch(LIST_PUBLICATIONS, None).await?;

        let publications: Vec<Publication> = data
            .publications
            .into_nodes()
            .into_iter()
            .take(PUBLICATIONS_PAGE_SIZE)
            .collect();

        tracing::debug!(count = publications.len(), "listed publications");
        Ok(publications)
    }

    /// Lists the publications `product_id` is currently published to.
    ///
    /// At most 10 are returned. An unknown product yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationsError::Graphql`] on transport, `errors`
    /// payload or decode failures.
    pub async fn list_product_publications(
        &self,
        product_id: &str,
    ) -> Result<Vec<Publication>, PublicationsError> {
        let product_gid = Gid::product(product_id);
        let variables = json!({ "productGid": product_gid.to_string() });

        let data: ProductPublicationsData = self
            .graphql
            .fetch(LIST_PRODUCT_PUBLICATIONS, Some(variables))
            .await?;

        let Some(product) = data.product else {
            tracing::debug!(product = %product_gid, "product not found");
            return Ok(Vec::new());
        };

        Ok(product
            .resource_publications
            .into_nodes()
            .into_iter()
            .take(PRODUCT_PUBLICATIONS_PAGE_SIZE)
            .map(|node| node.publication)
            .collect())
    }

    /// Publishes `product_id` to the publication `publication_gid`, effective now.
    ///
    /// # Errors
    ///
    /// Returns [`PublicationsError::UnableToPublish`] when the mutation
    /// reports any user error (each is logged first), and
    /// [`PublicationsError::Graphql`] on transport, `errors` payload or
    /// decode failures.
    pub async fn publish_product(
        &self,
        product_id: &str,
        publication_gid: &str,
    ) -> Result<(), PublicationsError> {
        let product_gid = Gid::product(product_id);
        let publish_date = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let variables = json!({
            "productGid": product_gid.to_string(),
            "publicationGid": publication_gid,
            "publishDate": publish_date,
        });

        let data: PublishData = self.graphql.fetch(PUBLISH_PRODUCT, Some(variables)).await?;
        let user_errors = data.publishable_publish.user_errors;

        if !user_errors.is_empty() {
            for user_error in &user_errors {
                tracing::error!(
                    product = %product_gid,
                    publication = publication_gid,
                    "publish rejected: {user_error}"
                );
            }
            return Err(PublicationsError::UnableToPublish { user_errors });
        }

        tracing::info!(product = %product_gid, publication = publication_gid, %publish_date, "published");
        Ok(())
    }
}
