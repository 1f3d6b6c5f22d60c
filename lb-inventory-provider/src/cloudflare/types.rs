//! Cloudflare API 类型定义

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Cloudflare API 通用响应
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<CloudflareError>,
    pub result_info: Option<CloudflareResultInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i64,
    pub message: String,
}

/// 分页信息；不同接口返回的字段不完全一致，全部可选
#[derive(Debug, Default, Deserialize)]
pub struct CloudflareResultInfo {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub total_count: Option<u32>,
    pub total_pages: Option<u32>,
}

/// Cloudflare Zone 结构
#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
}

/// Cloudflare Load Balancer 结构（响应）
#[derive(Debug, Deserialize)]
pub struct CloudflareLoadBalancer {
    pub id: String,
    pub name: String,
    /// 缺省时 Cloudflare 视为启用
    pub enabled: Option<bool>,
    pub description: Option<String>,
    pub proxied: Option<bool>,
    pub ttl: Option<u32>,
    pub steering_policy: Option<String>,
    #[serde(default)]
    pub default_pools: Vec<String>,
    pub fallback_pool: Option<String>,
    #[serde(default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub modified_on: Option<DateTime<Utc>>,
}
