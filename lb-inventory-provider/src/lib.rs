//! # lb-inventory-provider
//!
//! Typed, read-only access to the zones and load balancers of a Cloudflare
//! account through the v4 REST API.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for static builds and cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lb_inventory_provider::{create_provider, ApiCredentials, PaginationParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ApiCredentials::new("ops@example.com", "global-api-key"));
//!
//!     let zones = provider
//!         .list_zones("023e105f4ecef8ad9ca31a8372d0c353", &PaginationParams::default())
//!         .await?;
//!
//!     for zone in zones.items() {
//!         let mut page = provider.list_load_balancers(&zone.id).await?;
//!         loop {
//!             for lb in page.items() {
//!                 println!("{} {} enabled={}", lb.id, lb.name, lb.enabled);
//!             }
//!             match provider.next_load_balancer_page(&page).await? {
//!                 Some(next) => page = next,
//!                 None => break,
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//! - [`ProviderError::ZoneNotFound`] — zone unknown or not visible
//! - [`ProviderError::RateLimited`] — API rate limit exceeded (retryable)
//! - [`ProviderError::NetworkError`] — network connectivity issue (retryable)
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! with exponential backoff according to [`RetryConfig`].

mod cloudflare;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::LoadBalancerProvider;

// Re-export types
pub use types::{
    ApiCredentials, LoadBalancer, Page, PageCursor, PaginationParams, Zone, ZoneStatus,
};

pub use http_client::RetryConfig;

// Re-export utils module
pub use utils::datetime;

pub use cloudflare::CloudflareProvider;
