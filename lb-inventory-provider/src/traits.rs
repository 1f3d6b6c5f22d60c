use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{LoadBalancer, Page, PaginationParams, Zone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（Cloudflare 为数字字符串）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone ID（用于 `ZoneNotFound`）
    pub zone_id: Option<String>,
    /// Load Balancer ID（用于 `LoadBalancerNotFound`）
    pub load_balancer_id: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            load_balancer_id: None,
        }
    }

    pub fn load_balancer(zone_id: &str, load_balancer_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            load_balancer_id: Some(load_balancer_id.to_string()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Read-only access to the zones and load balancers of an account.
///
/// Listings are paged: the first page comes from `list_*`, each following page
/// from the matching `next_*_page` call with the current page. A `next_*_page`
/// call on a page without a cursor returns `Ok(None)`.
#[async_trait]
pub trait LoadBalancerProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 获取账户下的 Zone 列表（首页）
    async fn list_zones(&self, account_id: &str, params: &PaginationParams) -> Result<Page<Zone>>;

    /// 获取 Zone 列表的下一页；没有更多页时返回 `None`
    async fn next_zone_page(&self, page: &Page<Zone>) -> Result<Option<Page<Zone>>>;

    /// 获取 Zone 下的 Load Balancer 列表（首页）
    async fn list_load_balancers(&self, zone_id: &str) -> Result<Page<LoadBalancer>>;

    /// 获取 Load Balancer 列表的下一页；没有更多页时返回 `None`
    async fn next_load_balancer_page(
        &self,
        page: &Page<LoadBalancer>,
    ) -> Result<Option<Page<LoadBalancer>>>;

    /// 获取单个 Load Balancer 详情
    async fn get_load_balancer(&self, zone_id: &str, load_balancer_id: &str)
    -> Result<LoadBalancer>;
}
