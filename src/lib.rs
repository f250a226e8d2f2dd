//! # Shopify Publisher
//!
//! An interactive tool for publishing Shopify products to sales channel
//! publications through the Admin GraphQL API.
//!
//! ## Overview
//!
//! - [`store::ConfigStore`]: reads or creates the credentials file
//! - [`publications::PublicationsClient`]: lists publications and publishes products
//! - [`prompt`]: the [`prompt::Prompter`] capability and the three prompt shapes
//! - [`printer`]: console listing of publications
//! - [`driver`]: the prompt loop tying the pieces together
//!
//! ## Example
//!
//! ```rust,ignore
//! use shopify_publisher::driver;
//! use shopify_publisher::prompt::TerminalPrompter;
//! use shopify_publisher::store::ConfigStore;
//! use shopify_publisher::ClientConfig;
//!
//! let store = ConfigStore::new(ConfigStore::default_path());
//! let mut prompter = TerminalPrompter::new();
//! let mut stdout = std::io::stdout();
//!
//! driver::run(&store, &ClientConfig::default(), &mut prompter, &mut stdout).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the credentials store and client configuration are
//!   passed explicitly
//! - **Typed responses**: each GraphQL operation decodes into its own records
//!   and fails loudly on shape mismatch
//! - **Swappable prompts**: the driver only sees the [`prompt::Prompter`] trait
//! - **Fail fast**: any error ends the session; nothing is retried

pub mod clients;
pub mod config;
pub mod driver;
pub mod error;
pub mod printer;
pub mod prompt;
pub mod publications;
pub mod store;

pub use config::{AccessToken, ApiVersion, ClientConfig, ClientConfigBuilder, HostUrl, ShopDomain};
pub use error::{ConfigError, Error};

pub use publications::{Publication, PublicationsClient, PublicationsError};
pub use store::{ConfigStore, Credentials};
