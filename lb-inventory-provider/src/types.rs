use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

// ============ Credentials ============

/// Global API key credentials (`X-Auth-Email` + `X-Auth-Key`).
///
/// `Debug` masks the key, so the value can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    /// Email address of the account the key belongs to.
    pub api_email: String,
    /// Global API key.
    pub api_key: String,
}

impl ApiCredentials {
    pub fn new(api_email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_email: api_email.into(),
            api_key: api_key.into(),
        }
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_email", &self.api_email)
            .field("api_key", &mask_secret(&self.api_key))
            .finish()
    }
}

// ============ Pagination ============

/// Pagination parameters for list operations.
///
/// Pages are 1-indexed.
///
/// # Default
///
/// The default is `page = 1, page_size = 20`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}

impl PaginationParams {
    /// Clamp pagination values to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `page_size` is clamped to `1..=max_page_size`
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
        }
    }
}

/// Opaque continuation handle pointing at the next page of a listing.
///
/// Produced by the provider from the response's paging metadata; callers only
/// hand it back through [`Page`]. Its absence means the listing is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    scope: String,
    page: u32,
    per_page: u32,
}

impl PageCursor {
    /// Build a cursor for `page` of the listing identified by `scope`.
    ///
    /// `scope` is the request path including any filters, without paging
    /// parameters.
    pub fn new(scope: impl Into<String>, page: u32, per_page: u32) -> Self {
        Self {
            scope: scope.into(),
            page,
            per_page,
        }
    }

    /// Request path (and filters) the cursor continues.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Page number this cursor will fetch.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size the listing was started with.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

/// One bounded batch of listing results plus an optional continuation handle.
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    cursor: Option<PageCursor>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, cursor: Option<PageCursor>) -> Self {
        Self { items, cursor }
    }

    /// A final page: no continuation.
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// An empty final page.
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Continuation handle for the following page, if any.
    pub fn cursor(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}

// ============ Zone Types ============

/// Status of a zone within the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    /// Zone is active and resolving.
    Active,
    /// Zone is waiting for nameserver delegation or is still being set up.
    Pending,
    /// Zone has moved away from Cloudflare.
    Moved,
    /// Status could not be determined.
    Unknown,
}

/// A zone (managed domain) in the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Zone identifier.
    pub id: String,
    /// Zone name (e.g., `"example.com"`).
    pub name: String,
    /// Current zone status.
    pub status: ZoneStatus,
}

// ============ Load Balancer Types ============

/// A load balancer attached to a zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBalancer {
    /// Load balancer identifier.
    pub id: String,
    /// DNS name the load balancer answers for (e.g., `"www.example.com"`).
    pub name: String,
    /// Whether the load balancer is serving traffic.
    pub enabled: bool,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether traffic flows through the Cloudflare proxy.
    pub proxied: bool,
    /// DNS TTL for unproxied answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Steering policy (`"off"`, `"geo"`, `"dynamic_latency"`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steering_policy: Option<String>,
    /// Pool identifiers in failover order.
    pub default_pools: Vec<String>,
    /// Pool used when every default pool is unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_pool: Option<String>,
    #[serde(default, with = "crate::utils::datetime")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::utils::datetime")]
    pub modified_on: Option<DateTime<Utc>>,
}
