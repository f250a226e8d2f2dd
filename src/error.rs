//! Error types for the publisher.
//!
//! Each layer owns a focused error enum ([`ConfigError`] here, plus
//! [`StoreError`], [`PromptError`], [`GraphqlError`] and
//! [`PublicationsError`] in their own modules). The [`enum@Error`] type
//! unifies them for the driver loop and the binary, where every failure is
//! fatal to the run.
//!
//! # Example
//!
//! ```rust
//! use shopify_publisher::{ConfigError, ShopDomain};
//!
//! let result = ShopDomain::new("not a shop");
//! assert!(matches!(result, Err(ConfigError::InvalidShopDomain { .. })));
//! ```

use thiserror::Error;

use crate::clients::graphql::GraphqlError;
use crate::prompt::PromptError;
use crate::publications::PublicationsError;
use crate::store::StoreError;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2021-07') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'http://localhost:8080').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Any failure that ends a publishing session.
#[derive(Debug, Error)]
pub enum Error {
    /// Client configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The credentials file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An interactive prompt failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// A GraphQL request failed outside of a publications operation.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// A publications operation failed.
    #[error(transparent)]
    Publications(#[from] PublicationsError),

    /// Writing to the console failed.
    #[error("Console output failed: {0}")]
    Io(#[from] std::io::Error),
}
