//! Zone listing and the per-zone load balancer walk.

use std::io::{self, Write};

use lb_inventory_provider::{
    LoadBalancer, LoadBalancerProvider, Page, PaginationParams, ProviderError,
};
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::policy::{CallPolicies, ErrorPolicy, PageRetryPolicy};
use crate::printer::Printer;

/// Zones requested per page.
pub const ZONE_PAGE_SIZE: u32 = 50;

/// Errors that end the run
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to list zones in Cloudflare Account: {0}")]
    ZoneListing(#[source] ProviderError),

    #[error("Failed to list load balancers in Cloudflare Zone {zone_id}: {source}")]
    LoadBalancerListing {
        zone_id: String,
        #[source]
        source: ProviderError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Outcome of walking the load balancers of one zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Pages received and printed.
    pub pages: usize,
    /// Load balancers printed.
    pub load_balancers: usize,
    /// Client errors printed and skipped.
    pub errors: usize,
    /// The zone was abandoned after repeated next-page failures.
    pub gave_up: bool,
}

/// Outcome of the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySummary {
    pub zone_pages: usize,
    pub zones: usize,
    pub load_balancer_pages: usize,
    pub load_balancers: usize,
    pub errors: usize,
    pub zones_given_up: usize,
}

impl InventorySummary {
    fn add_walk(&mut self, walk: &WalkSummary) {
        self.zones += 1;
        self.load_balancer_pages += walk.pages;
        self.load_balancers += walk.load_balancers;
        self.errors += walk.errors;
        if walk.gave_up {
            self.zones_given_up += 1;
        }
    }
}

fn log_provider_error(context: &str, err: &ProviderError) {
    if err.is_expected() {
        tracing::warn!("{context}: {err}");
    } else {
        tracing::error!("{context}: {err}");
    }
}

/// List the zones of the configured account and walk each zone's load balancers.
///
/// Zones are visited in the order the API returns them, one zone page at a
/// time; every zone is walked to completion before the next one starts.
pub async fn list_zones<P, W>(
    provider: &P,
    config: &Config,
    printer: &mut Printer<W>,
) -> Result<InventorySummary, InventoryError>
where
    P: LoadBalancerProvider + ?Sized,
    W: Write,
{
    let mut summary = InventorySummary::default();
    printer.info(&format!("Listing Zones in Account ID {}", config.account_id))?;

    let params = PaginationParams {
        page: 1,
        page_size: ZONE_PAGE_SIZE,
    };
    let mut page = match provider.list_zones(&config.account_id, &params).await {
        Ok(page) => page,
        Err(e) => {
            summary.errors += 1;
            return zone_listing_failed(config.policies, printer, e).map(|()| summary);
        }
    };

    loop {
        summary.zone_pages += 1;
        tracing::debug!(
            zone_page = summary.zone_pages,
            zones = page.len(),
            "zone page received"
        );

        for zone in page.items() {
            printer.line(&format!("Fetching Load Balancers in Zone ID -- {}", zone.id))?;
            tracing::debug!(zone_id = %zone.id, zone_name = %zone.name, "walking zone");
            let walk = walk_load_balancers(
                provider,
                &zone.id,
                config.policies,
                config.page_retry,
                printer,
            )
            .await?;
            summary.add_walk(&walk);
        }

        match provider.next_zone_page(&page).await {
            Ok(Some(next)) => page = next,
            Ok(None) => break,
            Err(e) => {
                summary.errors += 1;
                zone_listing_failed(config.policies, printer, e)?;
                break;
            }
        }
    }

    Ok(summary)
}

fn zone_listing_failed<W: Write>(
    policies: CallPolicies,
    printer: &mut Printer<W>,
    err: ProviderError,
) -> Result<(), InventoryError> {
    printer.failure("Failed to list zones in Cloudflare Account.", &err)?;
    log_provider_error("zone listing failed", &err);
    match policies.zone_listing {
        ErrorPolicy::Fatal => Err(InventoryError::ZoneListing(err)),
        ErrorPolicy::LogAndContinue => Ok(()),
    }
}

/// Print every load balancer of `zone_id`, page by page.
///
/// A failed first page is reported and treated as an empty last page. A
/// failed next-page request is reported and retried from the same page
/// until `page_retry` says to give up on the zone.
pub async fn walk_load_balancers<P, W>(
    provider: &P,
    zone_id: &str,
    policies: CallPolicies,
    page_retry: PageRetryPolicy,
    printer: &mut Printer<W>,
) -> Result<WalkSummary, InventoryError>
where
    P: LoadBalancerProvider + ?Sized,
    W: Write,
{
    let mut summary = WalkSummary::default();

    let mut current: Page<LoadBalancer> = match provider.list_load_balancers(zone_id).await {
        Ok(page) => {
            summary.pages += 1;
            page
        }
        Err(e) => {
            summary.errors += 1;
            printer.failure("Failed to list load balancers in Cloudflare Zone.", &e)?;
            log_provider_error(&format!("zone {zone_id}: first page failed"), &e);
            if policies.first_page == ErrorPolicy::Fatal {
                return Err(InventoryError::LoadBalancerListing {
                    zone_id: zone_id.to_string(),
                    source: e,
                });
            }
            Page::empty()
        }
    };

    if current.is_empty() {
        printer.info(&format!("No load balancers found in Zone ID {zone_id}"))?;
    }
    printer.load_balancers(current.items())?;
    summary.load_balancers += current.len();

    let mut consecutive_failures: u32 = 0;
    loop {
        match provider.next_load_balancer_page(&current).await {
            Ok(None) => break,
            Ok(Some(next)) => {
                consecutive_failures = 0;
                printer.load_balancers(next.items())?;
                summary.pages += 1;
                summary.load_balancers += next.len();
                current = next;
            }
            Err(e) => {
                summary.errors += 1;
                printer.failure("Failed to fetch next page of load balancers.", &e)?;
                log_provider_error(&format!("zone {zone_id}: next page failed"), &e);
                if policies.next_page == ErrorPolicy::Fatal {
                    return Err(InventoryError::LoadBalancerListing {
                        zone_id: zone_id.to_string(),
                        source: e,
                    });
                }

                consecutive_failures = consecutive_failures.saturating_add(1);
                if page_retry.gives_up_after(consecutive_failures) {
                    printer.error(&format!(
                        "Giving up on Zone ID {zone_id} after {consecutive_failures} failed page requests."
                    ))?;
                    tracing::warn!(zone_id, consecutive_failures, "giving up on zone");
                    summary.gave_up = true;
                    break;
                }
            }
        }
    }

    tracing::debug!(
        zone_id,
        pages = summary.pages,
        load_balancers = summary.load_balancers,
        errors = summary.errors,
        "zone walk finished"
    );
    Ok(summary)
}
