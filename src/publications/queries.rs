//! GraphQL documents and their response records.
//!
//! Each operation has its own record type so a schema change fails decoding
//! instead of yielding empty values.

use serde::Deserialize;

use crate::clients::graphql::Connection;
use crate::publications::types::{Publication, UserError};

/// Maximum number of publications listed for the shop.
pub const PUBLICATIONS_PAGE_SIZE: usize = 20;

/// Maximum number of publications listed for a single product.
pub const PRODUCT_PUBLICATIONS_PAGE_SIZE: usize = 10;

pub const LIST_PUBLICATIONS: &str = r"query publications {
  publications(first: 20) {
    edges {
      node {
        gid: id
        name
      }
    }
  }
}";

pub const LIST_PRODUCT_PUBLICATIONS: &str = r"query productPublications($productGid: ID!) {
  product(id: $productGid) {
    resourcePublications(first: 10) {
      edges {
        node {
          publication {
            gid: id
            name
          }
        }
      }
    }
  }
}";

pub const PUBLISH_PRODUCT: &str = r"mutation publishablePublish($productGid: ID!, $publicationGid: ID!, $publishDate: DateTime) {
  publishablePublish(id: $productGid, input: { publicationId: $publicationGid, publishDate: $publishDate }) {
    userErrors {
      field
      message
    }
  }
}";

#[derive(Debug, Deserialize)]
pub struct PublicationsData {
    pub publications: Connection<Publication>,
}

#[derive(Debug, Deserialize)]
pub struct ProductPublicationsData {
    /// `null` when no product has the requested id.
    pub product: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub resource_publications: Connection<ResourcePublication>,
}

#[derive(Debug, Deserialize)]
pub struct ResourcePublication {
    pub publication: Publication,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishData {
    pub publishable_publish: PublishPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishPayload {
    pub user_errors: Vec<UserError>,
}
