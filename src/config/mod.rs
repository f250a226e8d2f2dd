//! Connection settings for the Admin API.
//!
//! # Overview
//!
//! - [`ClientConfig`]: API version, optional host override and User-Agent prefix
//! - [`ClientConfigBuilder`]: builder for [`ClientConfig`]
//! - [`ShopDomain`]: a validated `*.myshopify.com` domain
//! - [`AccessToken`]: an access token with masked debug output
//! - [`HostUrl`]: a validated base URL override
//! - [`ApiVersion`]: the Admin API version segment of the endpoint path
//!
//! Credentials (shop name and token) are not part of [`ClientConfig`]; they
//! come from the [`ConfigStore`](crate::store::ConfigStore).
//!
//! # Example
//!
//! ```rust
//! use shopify_publisher::{ApiVersion, ClientConfig, HostUrl};
//!
//! let config = ClientConfig::builder()
//!     .api_version(ApiVersion::Unstable)
//!     .host(HostUrl::new("http://localhost:8080").unwrap())
//!     .build();
//!
//! assert_eq!(config.api_version(), &ApiVersion::Unstable);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Environment variable selecting the Admin API version.
pub const API_VERSION_ENV: &str = "SHOPIFY_API_VERSION";

/// Environment variable replacing `https://{shop}.myshopify.com`.
pub const API_HOST_ENV: &str = "SHOPIFY_API_HOST";

/// Environment variable prepended to the `User-Agent` header.
pub const USER_AGENT_PREFIX_ENV: &str = "SHOPIFY_PUBLISHER_USER_AGENT";

/// Settings shared by every request the client sends.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    api_version: ApiVersion,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Builds a configuration from environment-style lookups.
    ///
    /// Reads [`API_VERSION_ENV`], [`API_HOST_ENV`] and
    /// [`USER_AGENT_PREFIX_ENV`]; unset or empty values keep the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value is set but invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_publisher::ClientConfig;
    ///
    /// let config = ClientConfig::from_lookup(|key| match key {
    ///     "SHOPIFY_API_VERSION" => Some("2022-01".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.api_version().to_string(), "2022-01");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(version) = value(API_VERSION_ENV) {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(host) = value(API_HOST_ENV) {
            builder = builder.host(HostUrl::new(host)?);
        }
        if let Some(prefix) = value(USER_AGENT_PREFIX_ENV) {
            builder = builder.user_agent_prefix(prefix.trim());
        }
        Ok(builder.build())
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::pinned`]
/// - `host`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_version: Option<ApiVersion>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sends requests to `host` instead of the shop's own domain.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`].
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            api_version: self.api_version.unwrap_or_default(),
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}
