//! The whole run, from configuration to the last zone.

use std::io::Write;
use std::sync::Arc;

use lb_inventory_provider::LoadBalancerProvider;

use crate::config::Config;
use crate::inventory::{self, InventoryError, InventorySummary};
use crate::printer::Printer;

/// Load the configuration through `lookup`, build the client with `connect`
/// and print the inventory.
///
/// `connect` is only called once the configuration is complete, so a missing
/// variable never results in a client or a request.
pub async fn execute<L, C, W>(
    lookup: L,
    connect: C,
    printer: &mut Printer<W>,
) -> Result<InventorySummary, InventoryError>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&Config) -> Arc<dyn LoadBalancerProvider>,
    W: Write,
{
    printer.info("Fetching environment variables...")?;
    let config = match Config::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            printer.error(&e.to_string())?;
            return Err(e.into());
        }
    };
    printer.success("Environment variables fetched!")?;
    tracing::debug!(
        account_id = %config.account_id,
        credentials = ?config.credentials,
        page_retry = %config.page_retry,
        "configuration loaded"
    );

    printer.info("Opening Cloudflare Client...")?;
    let provider = connect(&config);
    tracing::debug!(provider = provider.id(), "client ready");

    let summary = inventory::list_zones(provider.as_ref(), &config, printer).await?;
    tracing::info!(
        zones = summary.zones,
        load_balancers = summary.load_balancers,
        errors = summary.errors,
        zones_given_up = summary.zones_given_up,
        "inventory complete"
    );
    Ok(summary)
}
