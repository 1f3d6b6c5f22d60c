//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use lb_inventory_provider::{
    ApiCredentials, CloudflareProvider, LoadBalancerProvider, RetryConfig, create_provider,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 真实账户测试上下文
pub struct TestContext {
    pub provider: Arc<dyn LoadBalancerProvider>,
    pub account_id: String,
}

impl TestContext {
    /// 从 `CF_ACCT_ID` / `CF_API_EMAIL` / `CF_API_KEY` 创建上下文
    pub fn cloudflare() -> Option<Self> {
        let account_id = env::var("CF_ACCT_ID").ok()?;
        let api_email = env::var("CF_API_EMAIL").ok()?;
        let api_key = env::var("CF_API_KEY").ok()?;

        Some(Self {
            provider: create_provider(ApiCredentials::new(api_email, api_key)),
            account_id,
        })
    }
}

// ============ 本地假 API ============

type Responder = dyn Fn(&str) -> (u16, String) + Send + Sync;

/// 本地 HTTP/1.1 假服务：按请求路径返回预设响应，并记录收到的请求头
pub struct FakeApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    /// 启动假服务，`respond` 根据请求路径（含查询串）返回状态码和响应体
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake api");
        let addr = listener.local_addr().expect("fake api addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond: Arc<Responder> = Arc::new(respond);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                let respond = Arc::clone(&respond);
                tokio::spawn(async move {
                    let Some(head) = read_head(&mut socket).await else {
                        return;
                    };
                    let path = head
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    recorded.lock().expect("requests lock").push(head);

                    let (status, body) = (*respond)(&path);
                    let response = format!(
                        "HTTP/1.1 {status} FAKE\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { addr, requests }
    }

    /// 指向假服务、关闭重试的 provider
    pub fn provider(&self) -> CloudflareProvider {
        self.provider_with_retry(RetryConfig::disabled())
    }

    pub fn provider_with_retry(&self, retry: RetryConfig) -> CloudflareProvider {
        CloudflareProvider::new(ApiCredentials::new("ops@example.com", "0123456789abcdef"))
            .with_base_url(format!("http://{}/", self.addr))
            .with_retry(retry)
    }

    /// 已收到的请求（请求行 + 请求头）
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// 已收到请求的路径
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|head| head.lines().next())
            .filter_map(|line| line.split_whitespace().nth(1))
            .map(str::to_string)
            .collect()
    }
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
            return Some(String::from_utf8_lossy(&buf).into_owned());
        }
    }
}

/// Cloudflare 成功信封
pub fn envelope(result: &serde_json::Value, result_info: Option<serde_json::Value>) -> String {
    let mut body = serde_json::json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result,
    });
    if let Some(info) = result_info {
        body["result_info"] = info;
    }
    body.to_string()
}

/// Cloudflare 失败信封
pub fn error_envelope(code: i64, message: &str) -> String {
    serde_json::json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null,
    })
    .to_string()
}

pub fn load_balancer_json(id: &str, name: &str, enabled: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "enabled": enabled,
        "proxied": true,
        "ttl": 30,
        "steering_policy": "off",
        "default_pools": ["17b5962d775c646f3f9725cbc7a53df4"],
        "fallback_pool": "17b5962d775c646f3f9725cbc7a53df4",
        "created_on": "2014-01-01T05:20:00.12345Z",
        "modified_on": "2014-01-01T05:20:00.12345Z"
    })
}
