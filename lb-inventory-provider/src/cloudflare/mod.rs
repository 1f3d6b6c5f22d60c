//! Cloudflare v4 API client

mod error;
mod http;
mod provider;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::http_client::RetryConfig;
use crate::types::ApiCredentials;

pub(crate) use types::{CloudflareLoadBalancer, CloudflareZone};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("lb-inventory/", env!("CARGO_PKG_VERSION"));

/// 创建带超时配置的 HTTP Client
///
/// 构建失败（TLS 后端初始化失败等）时退回默认配置，保证构造不会失败。
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Failed to build configured HTTP client, using defaults: {e}");
            Client::new()
        })
}

/// Cloudflare API client authenticated with a global API key.
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) credentials: ApiCredentials,
    pub(crate) base_url: String,
    pub(crate) retry: RetryConfig,
}

impl CloudflareProvider {
    pub fn new(credentials: ApiCredentials) -> Self {
        Self {
            client: create_http_client(),
            credentials,
            base_url: CF_API_BASE.to_string(),
            retry: RetryConfig::default(),
        }
    }

    /// Point the client at another API root (a proxy or a local fake).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

impl std::fmt::Debug for CloudflareProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareProvider")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
