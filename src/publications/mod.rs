//! Publication listing and product publishing.
//!
//! [`PublicationsClient`] wraps a [`GraphqlClient`](crate::clients::GraphqlClient)
//! and exposes the three operations the driver needs:
//!
//! - [`PublicationsClient::list_publications`]: the shop's first 20 publications
//! - [`PublicationsClient::list_product_publications`]: up to 10 publications
//!   a product is currently on
//! - [`PublicationsClient::publish_product`]: publish a product to one
//!   publication, effective immediately

mod client;
mod queries;
mod types;

pub use client::PublicationsClient;
pub use queries::{PRODUCT_PUBLICATIONS_PAGE_SIZE, PUBLICATIONS_PAGE_SIZE};
pub use types::{Gid, Publication, UserError};

use thiserror::Error;

use crate::clients::GraphqlError;

/// Error type for publication operations.
#[derive(Debug, Error)]
pub enum PublicationsError {
    /// The GraphQL request failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The publish mutation returned user errors.
    ///
    /// The individual errors are logged when they are received; the display
    /// text stays generic.
    #[error("unable to publish")]
    UnableToPublish {
        /// The user errors returned by the mutation.
        user_errors: Vec<UserError>,
    },
}
