//! The interactive publishing session.
//!
//! [`run`] loads credentials and builds the client; [`session`] drives the
//! loop:
//!
//! 1. list and print every publication once (this list is the menu for
//!    every product)
//! 2. ask for a product id; cancel or an empty answer ends the session
//! 3. print the product's current publications
//! 4. ask for a target publication; Skip goes back to step 2
//! 5. publish, then go back to step 2
//!
//! Any error ends the session. A failed publish is not retried and is not
//! caught by the loop.

use std::io::Write;

use crate::config::{ClientConfig, ShopDomain};
use crate::error::Error;
use crate::printer::print_publications;
use crate::prompt::{ask_product_id, ask_publication, Prompter};
use crate::publications::PublicationsClient;
use crate::store::ConfigStore;

/// Loads credentials from `store` and runs a [`session`] against the shop.
///
/// # Errors
///
/// Returns the first error encountered; see [`enum@Error`].
pub async fn run<P, W>(
    store: &ConfigStore,
    config: &ClientConfig,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), Error>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    let credentials = store.load(prompter)?;
    let shop = ShopDomain::new(&credentials.shop_name)?;
    let client = PublicationsClient::new(&shop, &credentials.access_token, config)?;

    tracing::info!(shop = %shop, endpoint = %client.graphql().endpoint(), "session started");
    session(&client, prompter, out).await
}

/// Runs the prompt loop with an already constructed client.
///
/// # Errors
///
/// Returns the first error encountered; see [`enum@Error`].
pub async fn session<P, W>(
    client: &PublicationsClient,
    prompter: &mut P,
    out: &mut W,
) -> Result<(), Error>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    let publications = client.list_publications().await?;
    print_publications(out, "All publications", &publications)?;

    loop {
        let Some(product_id) = ask_product_id(prompter)?.filter(|id| !id.is_empty()) else {
            break;
        };

        let current = client.list_product_publications(&product_id).await?;
        print_publications(out, "Product publications", &current)?;

        let Some(target) = ask_publication(prompter, &publications)? else {
            tracing::info!(product = %product_id, "skipped");
            writeln!(out, "Skipped.")?;
            continue;
        };

        client.publish_product(&product_id, &target.gid).await?;
        writeln!(out, "Published product {product_id} to {}.", target.name)?;
    }

    writeln!(out, "Done!")?;
    Ok(())
}
