//! Cloudflare HTTP 请求方法

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::PageCursor;
use crate::utils::log_sanitizer::truncate_for_log;

use super::CloudflareProvider;
use super::types::{CloudflareResponse, CloudflareResultInfo};

/// 为列表路径追加分页参数
pub(crate) fn paged_path(scope: &str, page: u32, per_page: u32) -> String {
    let separator = if scope.contains('?') { '&' } else { '?' };
    format!("{scope}{separator}page={page}&per_page={per_page}")
}

/// 根据 `result_info` 计算下一页游标
///
/// - 没有 `result_info`：单页接口，没有下一页
/// - 服务端返回的页码与请求的不一致：接口不支持分页，没有下一页
/// - 优先使用 `total_pages`，否则用 `total_count` 推算
pub(crate) fn next_cursor(
    scope: &str,
    requested_page: u32,
    info: Option<&CloudflareResultInfo>,
) -> Option<PageCursor> {
    let info = info?;
    let page = info.page.unwrap_or(requested_page);
    if page != requested_page {
        log::warn!(
            "[cloudflare] {scope}: requested page {requested_page} but got page {page}, stopping pagination"
        );
        return None;
    }
    let per_page = info.per_page.filter(|n| *n > 0)?;

    let has_more = match (info.total_pages, info.total_count) {
        (Some(total_pages), _) => page < total_pages,
        (None, Some(total_count)) => u64::from(page) * u64::from(per_page) < u64::from(total_count),
        (None, None) => false,
    };

    if has_more {
        Some(PageCursor::new(scope, page.checked_add(1)?, per_page))
    } else {
        None
    }
}

impl CloudflareProvider {
    /// 附加 API Key 认证头
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-Auth-Email", &self.credentials.api_email)
            .header("X-Auth-Key", &self.credentials.api_key)
    }

    /// 解析响应信封，并把 API 错误映射为 `ProviderError`
    pub(crate) fn decode_envelope<T: DeserializeOwned>(
        &self,
        status: u16,
        response_text: &str,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let cf_response: CloudflareResponse<T> = match serde_json::from_str(response_text) {
            Ok(parsed) => parsed,
            Err(e) => {
                // 网关层的 401/403 不一定返回 JSON 信封
                return Err(match status {
                    401 => ProviderError::InvalidCredentials {
                        provider: self.provider_name().to_string(),
                        raw_message: Some(truncate_for_log(response_text)),
                    },
                    403 => ProviderError::PermissionDenied {
                        provider: self.provider_name().to_string(),
                        raw_message: Some(truncate_for_log(response_text)),
                    },
                    _ => {
                        log::error!("JSON 解析失败 (HTTP {status}): {e}");
                        log::error!("原始响应: {}", truncate_for_log(response_text));
                        self.parse_error(e)
                    }
                });
            }
        };

        if !cf_response.success {
            let raw = cf_response.errors.first().map_or_else(
                || RawApiError::new(format!("Unknown error (HTTP {status})")),
                |e| RawApiError::with_code(e.code.to_string(), e.message.clone()),
            );
            log::error!("API 错误: {}", raw.message);
            return Err(self.map_error(raw, context));
        }

        Ok(cf_response)
    }

    /// 执行 GET 请求并返回解析后的信封
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{}{path}", self.base_url);
        let request = self.authorized(self.client.get(&url));

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request,
            self.provider_name(),
            "GET",
            &url,
            self.retry,
        )
        .await?;

        self.decode_envelope(status, &response_text, context)
    }

    /// 执行 GET 请求，返回 `result`
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        self.get_envelope(path, context)
            .await?
            .result
            .ok_or_else(|| self.parse_error("响应中缺少 result 字段"))
    }

    /// 执行列表 GET 请求
    ///
    /// `per_page` 为 `None` 时不附加分页参数（请求首页，页大小由服务端决定）。
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        scope: &str,
        page: u32,
        per_page: Option<u32>,
        context: ErrorContext,
    ) -> Result<(Vec<T>, Option<PageCursor>)> {
        let path = match per_page {
            Some(per_page) => paged_path(scope, page, per_page),
            None => scope.to_string(),
        };

        let envelope: CloudflareResponse<Vec<T>> = self.get_envelope(&path, context).await?;
        let cursor = next_cursor(scope, page, envelope.result_info.as_ref());
        let items = envelope.result.unwrap_or_default();

        log::debug!(
            "[cloudflare] {scope} page {page}: {} item(s), more: {}",
            items.len(),
            cursor.is_some()
        );

        Ok((items, cursor))
    }
}
