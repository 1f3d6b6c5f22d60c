//! Cloudflare `LoadBalancerProvider` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, LoadBalancerProvider, ProviderErrorMapper};
use crate::types::{LoadBalancer, Page, PaginationParams, Zone, ZoneStatus};

use super::{CloudflareLoadBalancer, CloudflareProvider, CloudflareZone, MAX_PAGE_SIZE_ZONES};

impl CloudflareProvider {
    /// 将 Cloudflare zone 转换为 `Zone`
    /// Cloudflare 状态：active, pending, initializing, moved
    pub(crate) fn zone_from_wire(zone: CloudflareZone) -> Zone {
        let status = match zone.status.as_str() {
            "active" => ZoneStatus::Active,
            "pending" | "initializing" => ZoneStatus::Pending,
            "moved" => ZoneStatus::Moved,
            _ => ZoneStatus::Unknown,
        };

        Zone {
            id: zone.id,
            name: zone.name,
            status,
        }
    }

    /// 将 Cloudflare load balancer 转换为 `LoadBalancer`
    pub(crate) fn load_balancer_from_wire(lb: CloudflareLoadBalancer) -> LoadBalancer {
        LoadBalancer {
            id: lb.id,
            name: lb.name,
            enabled: lb.enabled.unwrap_or(true),
            description: lb.description.filter(|d| !d.is_empty()),
            proxied: lb.proxied.unwrap_or(false),
            ttl: lb.ttl,
            steering_policy: lb.steering_policy,
            default_pools: lb.default_pools,
            fallback_pool: lb.fallback_pool,
            created_on: lb.created_on,
            modified_on: lb.modified_on,
        }
    }

    /// 标识符不能为空，否则会请求到上一级资源
    fn require_id(&self, param: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: param.to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LoadBalancerProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn list_zones(&self, account_id: &str, params: &PaginationParams) -> Result<Page<Zone>> {
        self.require_id("account_id", account_id)?;
        let params = params.validated(MAX_PAGE_SIZE_ZONES);
        let scope = format!("/zones?account.id={}", urlencoding::encode(account_id));

        let (zones, cursor) = self
            .get_page::<CloudflareZone>(
                &scope,
                params.page,
                Some(params.page_size),
                ErrorContext::default(),
            )
            .await?;

        Ok(Page::new(
            zones.into_iter().map(Self::zone_from_wire).collect(),
            cursor,
        ))
    }

    async fn next_zone_page(&self, page: &Page<Zone>) -> Result<Option<Page<Zone>>> {
        let Some(cursor) = page.cursor() else {
            return Ok(None);
        };

        let (zones, next) = self
            .get_page::<CloudflareZone>(
                cursor.scope(),
                cursor.page(),
                Some(cursor.per_page()),
                ErrorContext::default(),
            )
            .await?;

        Ok(Some(Page::new(
            zones.into_iter().map(Self::zone_from_wire).collect(),
            next,
        )))
    }

    async fn list_load_balancers(&self, zone_id: &str) -> Result<Page<LoadBalancer>> {
        self.require_id("zone_id", zone_id)?;
        let scope = format!("/zones/{}/load_balancers", urlencoding::encode(zone_id));

        let (lbs, cursor) = self
            .get_page::<CloudflareLoadBalancer>(&scope, 1, None, ErrorContext::zone(zone_id))
            .await?;

        Ok(Page::new(
            lbs.into_iter().map(Self::load_balancer_from_wire).collect(),
            cursor,
        ))
    }

    async fn next_load_balancer_page(
        &self,
        page: &Page<LoadBalancer>,
    ) -> Result<Option<Page<LoadBalancer>>> {
        let Some(cursor) = page.cursor() else {
            return Ok(None);
        };

        let (lbs, next) = self
            .get_page::<CloudflareLoadBalancer>(
                cursor.scope(),
                cursor.page(),
                Some(cursor.per_page()),
                ErrorContext::default(),
            )
            .await?;

        Ok(Some(Page::new(
            lbs.into_iter().map(Self::load_balancer_from_wire).collect(),
            next,
        )))
    }

    async fn get_load_balancer(
        &self,
        zone_id: &str,
        load_balancer_id: &str,
    ) -> Result<LoadBalancer> {
        self.require_id("zone_id", zone_id)?;
        self.require_id("load_balancer_id", load_balancer_id)?;

        let lb: CloudflareLoadBalancer = self
            .get(
                &format!(
                    "/zones/{}/load_balancers/{}",
                    urlencoding::encode(zone_id),
                    urlencoding::encode(load_balancer_id)
                ),
                ErrorContext::load_balancer(zone_id, load_balancer_id),
            )
            .await?;

        Ok(Self::load_balancer_from_wire(lb))
    }
}
