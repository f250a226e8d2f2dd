//! Transport layer for the Shopify Admin API.
//!
//! - [`HttpClient`]: authenticated JSON transport bound to one shop
//! - [`HttpResponse`]: a parsed response with Shopify header helpers
//! - [`graphql::GraphqlClient`]: GraphQL requests with typed decoding
//!
//! Requests are sent once; there is no retry or backoff. A transient
//! network failure or rate limit surfaces directly as an error.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, ACCESS_TOKEN_HEADER, PUBLISHER_VERSION};
pub use http_response::{ApiCallLimit, HttpResponse};

pub use graphql::{GraphqlClient, GraphqlError};
