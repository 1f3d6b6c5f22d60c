//! Provider factory.

use std::sync::Arc;

use crate::cloudflare::CloudflareProvider;
use crate::traits::LoadBalancerProvider;
use crate::types::ApiCredentials;

/// Creates a [`LoadBalancerProvider`] for the Cloudflare v4 API.
///
/// The returned provider is wrapped in `Arc<dyn LoadBalancerProvider>` for easy
/// sharing across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use lb_inventory_provider::{create_provider, ApiCredentials};
///
/// let provider = create_provider(ApiCredentials::new("ops@example.com", "global-api-key"));
/// assert_eq!(provider.id(), "cloudflare");
/// ```
pub fn create_provider(credentials: ApiCredentials) -> Arc<dyn LoadBalancerProvider> {
    Arc::new(CloudflareProvider::new(credentials))
}
