//! `shopify-publisher`: publish products to sales channels interactively.
//!
//! Takes no arguments. Behavior can be adjusted through the environment:
//!
//! - `SHOPIFY_PUBLISHER_CONFIG`: credentials file (default: `config.json`
//!   next to the executable)
//! - `SHOPIFY_API_VERSION`: Admin API version (default: `2021-07`)
//! - `SHOPIFY_API_HOST`: base URL replacing `https://{shop}.myshopify.com`
//! - `SHOPIFY_PUBLISHER_USER_AGENT`: prefix for the `User-Agent` header
//! - `RUST_LOG`: log filter (default: `shopify_publisher=info`)

use std::env;
use std::process::ExitCode;

use shopify_publisher::prompt::TerminalPrompter;
use shopify_publisher::store::{ConfigStore, CONFIG_PATH_ENV};
use shopify_publisher::{driver, ClientConfig, Error};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shopify_publisher=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Error> {
    let config = ClientConfig::from_lookup(|key| env::var(key).ok())?;
    let store = ConfigStore::new(
        env::var_os(CONFIG_PATH_ENV).map_or_else(ConfigStore::default_path, Into::into),
    );

    let mut prompter = TerminalPrompter::new();
    let mut stdout = std::io::stdout().lock();

    driver::run(&store, &config, &mut prompter, &mut stdout).await
}

/// Process exit status for a finished session: 0 after "Done!", 1 otherwise.
const fn exit_status(result: &Result<(), Error>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let result = run().await;
    if let Err(error) = &result {
        tracing::error!(%error, "session aborted");
        eprintln!("Error: {error}");
    }

    ExitCode::from(exit_status(&result))
}
