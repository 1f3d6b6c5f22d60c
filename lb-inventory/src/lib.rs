//! Zone and load balancer inventory for a Cloudflare account.
//!
//! The binary reads `CF_ACCT_ID`, `CF_API_EMAIL` and `CF_API_KEY`, lists the
//! zones of the account and prints one line per load balancer:
//!
//! ```text
//! \tLoad Balancer ID: <id> || Name: <name> // Enabled: <true|false>\r\n
//! ```
//!
//! Everything that talks to the API goes through
//! [`LoadBalancerProvider`](lb_inventory_provider::LoadBalancerProvider), so the
//! walk can be driven by any implementation of it.

pub mod app;
pub mod config;
pub mod inventory;
pub mod policy;
pub mod printer;

pub use config::{Config, ConfigError};
pub use inventory::{InventoryError, InventorySummary, WalkSummary};
pub use policy::{CallPolicies, ErrorPolicy, PageRetryPolicy};
pub use printer::Printer;
