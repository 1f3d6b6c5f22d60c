//! Scripted in-memory provider for driving the inventory walk.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use lb_inventory::{Config, Printer};
use lb_inventory_provider::{
    LoadBalancer, LoadBalancerProvider, Page, PageCursor, PaginationParams, ProviderError,
    Result, Zone, ZoneStatus,
};
use tokio::sync::Mutex;

pub const ACCOUNT_ID: &str = "acct-0123";

pub fn lb(id: &str, name: &str, enabled: bool) -> LoadBalancer {
    LoadBalancer {
        id: id.to_string(),
        name: name.to_string(),
        enabled,
        description: None,
        proxied: true,
        ttl: None,
        steering_policy: None,
        default_pools: Vec::new(),
        fallback_pool: None,
        created_on: None,
        modified_on: None,
    }
}

pub fn zone(id: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: format!("{id}.example.com"),
        status: ZoneStatus::Active,
    }
}

pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "fake".to_string(),
        detail: "connection reset by peer".to_string(),
    }
}

pub fn auth_error() -> ProviderError {
    ProviderError::InvalidCredentials {
        provider: "fake".to_string(),
        raw_message: Some("Unknown X-Auth-Key or X-Auth-Email".to_string()),
    }
}

/// Line the printer emits for `lb`.
pub fn lb_line(lb: &LoadBalancer) -> String {
    format!(
        "\tLoad Balancer ID: {} || Name: {} // Enabled: {}\r\n",
        lb.id, lb.name, lb.enabled
    )
}

/// Scripted responses for one zone.
#[derive(Debug, Clone)]
pub struct ZoneScript {
    first: std::result::Result<Vec<LoadBalancer>, ProviderError>,
    next: VecDeque<std::result::Result<Vec<LoadBalancer>, ProviderError>>,
}

impl ZoneScript {
    pub fn first(items: Vec<LoadBalancer>) -> Self {
        Self {
            first: Ok(items),
            next: VecDeque::new(),
        }
    }

    pub fn failing_first(err: ProviderError) -> Self {
        Self {
            first: Err(err),
            next: VecDeque::new(),
        }
    }

    /// Queue a further page; the script ends after the last queued outcome.
    #[must_use]
    pub fn then_page(mut self, items: Vec<LoadBalancer>) -> Self {
        self.next.push_back(Ok(items));
        self
    }

    #[must_use]
    pub fn then_fail(mut self, err: ProviderError, times: usize) -> Self {
        for _ in 0..times {
            self.next.push_back(Err(err.clone()));
        }
        self
    }
}

/// Calls recorded by [`ScriptedProvider`].
#[derive(Debug, Default)]
pub struct Calls {
    pub list_zones: usize,
    pub next_zone_page: usize,
    pub list_load_balancers: Vec<String>,
    pub next_load_balancer_page: usize,
}

/// In-memory `LoadBalancerProvider` replaying scripted pages.
///
/// Load balancer pages carry a cursor scoped to their zone, so every probe
/// can be routed back to that zone's script. A probe on a page without a
/// cursor (or after the script is exhausted) returns `Ok(None)`.
pub struct ScriptedProvider {
    zone_pages: std::result::Result<Vec<Vec<Zone>>, ProviderError>,
    zone_next_error: Option<ProviderError>,
    scripts: Mutex<HashMap<String, ZoneScript>>,
    calls: Mutex<Calls>,
}

impl ScriptedProvider {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self::with_zone_pages(vec![zones])
    }

    pub fn with_zone_pages(pages: Vec<Vec<Zone>>) -> Self {
        Self {
            zone_pages: Ok(pages),
            zone_next_error: None,
            scripts: Mutex::new(HashMap::new()),
            calls: Mutex::new(Calls::default()),
        }
    }

    pub fn failing_zones(err: ProviderError) -> Self {
        Self {
            zone_pages: Err(err),
            zone_next_error: None,
            scripts: Mutex::new(HashMap::new()),
            calls: Mutex::new(Calls::default()),
        }
    }

    /// Fail every request for a zone page after the first.
    #[must_use]
    pub fn failing_next_zone_page(mut self, err: ProviderError) -> Self {
        self.zone_next_error = Some(err);
        self
    }

    #[must_use]
    pub fn script(self, zone_id: &str, script: ZoneScript) -> Self {
        self.scripts
            .try_lock()
            .expect("scripts are not shared yet")
            .insert(zone_id.to_string(), script);
        self
    }

    pub async fn calls<T>(&self, read: impl FnOnce(&Calls) -> T) -> T {
        read(&*self.calls.lock().await)
    }

    fn zone_page(pages: &[Vec<Zone>], number: usize) -> Page<Zone> {
        let items = pages.get(number - 1).cloned().unwrap_or_default();
        let cursor = (number < pages.len()).then(|| {
            PageCursor::new("zones", u32::try_from(number + 1).unwrap_or(u32::MAX), 50)
        });
        Page::new(items, cursor)
    }
}

#[async_trait]
impl LoadBalancerProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "fake"
    }

    async fn list_zones(&self, account_id: &str, params: &PaginationParams) -> Result<Page<Zone>> {
        assert_eq!(account_id, ACCOUNT_ID);
        assert_eq!(params.page, 1);
        self.calls.lock().await.list_zones += 1;
        match &self.zone_pages {
            Ok(pages) => Ok(Self::zone_page(pages, 1)),
            Err(e) => Err(e.clone()),
        }
    }

    async fn next_zone_page(&self, page: &Page<Zone>) -> Result<Option<Page<Zone>>> {
        self.calls.lock().await.next_zone_page += 1;
        let Some(cursor) = page.cursor() else {
            return Ok(None);
        };
        if let Some(err) = &self.zone_next_error {
            return Err(err.clone());
        }
        let pages = self.zone_pages.as_ref().map_err(Clone::clone)?;
        let number = usize::try_from(cursor.page()).unwrap_or(usize::MAX);
        Ok(Some(Self::zone_page(pages, number)))
    }

    async fn list_load_balancers(&self, zone_id: &str) -> Result<Page<LoadBalancer>> {
        self.calls
            .lock()
            .await
            .list_load_balancers
            .push(zone_id.to_string());

        let scripts = self.scripts.lock().await;
        let script = scripts
            .get(zone_id)
            .cloned()
            .unwrap_or_else(|| ZoneScript::first(Vec::new()));
        let items = script.first?;
        Ok(Page::new(items, Some(PageCursor::new(zone_id, 2, 20))))
    }

    async fn next_load_balancer_page(
        &self,
        page: &Page<LoadBalancer>,
    ) -> Result<Option<Page<LoadBalancer>>> {
        self.calls.lock().await.next_load_balancer_page += 1;

        let Some(cursor) = page.cursor() else {
            return Ok(None);
        };
        let mut scripts = self.scripts.lock().await;
        let Some(outcome) = scripts
            .get_mut(cursor.scope())
            .and_then(|script| script.next.pop_front())
        else {
            return Ok(None);
        };

        let items = outcome?;
        Ok(Some(Page::new(
            items,
            Some(PageCursor::new(cursor.scope(), cursor.page() + 1, 20)),
        )))
    }

    async fn get_load_balancer(
        &self,
        zone_id: &str,
        load_balancer_id: &str,
    ) -> Result<LoadBalancer> {
        Err(ProviderError::LoadBalancerNotFound {
            provider: "fake".to_string(),
            load_balancer_id: format!("{zone_id}/{load_balancer_id}"),
            raw_message: None,
        })
    }
}

/// Lookup over a fixed set of variables.
pub fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

pub fn full_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("CF_ACCT_ID", ACCOUNT_ID),
        ("CF_API_EMAIL", "ops@example.com"),
        ("CF_API_KEY", "0123456789abcdef"),
    ]
}

pub fn config() -> Config {
    Config::from_lookup(lookup(&full_env())).expect("complete test environment")
}

pub fn printer() -> Printer<Vec<u8>> {
    Printer::new(Vec::new())
}

pub fn output(printer: Printer<Vec<u8>>) -> String {
    String::from_utf8(printer.into_inner()).expect("printer writes UTF-8")
}

pub fn shared(provider: ScriptedProvider) -> Arc<ScriptedProvider> {
    Arc::new(provider)
}

/// Client factory handing out `fake`; raises `connected` when called.
pub fn connect_to(
    fake: &Arc<ScriptedProvider>,
    connected: &Arc<AtomicBool>,
) -> impl FnOnce(&Config) -> Arc<dyn LoadBalancerProvider> {
    let fake = Arc::clone(fake);
    let connected = Arc::clone(connected);
    move |_config: &Config| {
        connected.store(true, Ordering::SeqCst);
        fake as Arc<dyn LoadBalancerProvider>
    }
}
