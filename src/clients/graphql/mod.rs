//! GraphQL API client for the Shopify Admin API.
//!
//! - [`GraphqlClient`]: sends operations and decodes typed results
//! - [`GraphqlError`]: HTTP, `errors` payload, missing-data and decode failures
//! - [`Connection`]: the `edges { node }` wrapper shared by list fields
//!
//! # Response Structure
//!
//! GraphQL responses carry `data`, `errors` and `extensions`, all with
//! HTTP 200. [`GraphqlClient::fetch`] treats any `errors` entry as a
//! failure and never substitutes defaults for missing fields.

mod client;
mod errors;
mod response;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use response::{Connection, Edge, GraphqlErrorMessage, GraphqlResponse};
