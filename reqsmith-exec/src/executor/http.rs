use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use reqsmith_core::types::HttpMethod;

/// Wire-ready request produced by the builder: everything the transport
/// needs, nothing it has to re-derive. Headers are ordered and may contain
/// duplicates; the body's `Content-Type` is already among them.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: url::Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw transport response, read eagerly and in full before it is returned.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: Option<String>,
    /// Negotiated protocol version as text, e.g. `"HTTP/1.1"`.
    pub version: Option<String>,
    /// Headers in receipt order.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("no response within the configured deadline")]
    Timeout,
    #[error("no pooled connection became available within {0:?}")]
    PoolExhausted(Duration),
    #[error("connect/dns/tls error: {0}")]
    Network(String),
    #[error("http error: {0}")]
    Other(String),
}

/// The transport seam. The engine only ever talks to this trait, so tests
/// substitute a scripted implementation and never open a socket.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(
        &self,
        req: TransportRequest,
        timeout: Duration,
    ) -> Result<RawResponse, TransportError>;
}

/// Connection-pool and TLS policy for the shared transport. These are
/// deployment-level settings, fixed when the client is constructed; only the
/// total per-request deadline varies per call.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Upper bound on requests in flight across all hosts.
    pub max_in_flight: usize,
    /// Upper bound on requests in flight per destination host; callers over
    /// the bound wait for a slot, up to `pool_acquire_timeout`.
    pub max_per_host: usize,
    /// Warm idle connections retained in the pool per destination host.
    pub max_idle_per_host: usize,
    /// How long a send waits for an in-flight slot before giving up.
    pub pool_acquire_timeout: Duration,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    /// Idle connections older than this are evicted from the pool.
    pub idle_timeout: Duration,
    pub follow_redirects: bool,
    /// `false` disables certificate validation for every host — a
    /// development-mode escape hatch, not a per-request option.
    pub verify_tls: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 100,
            max_per_host: 20,
            max_idle_per_host: 20,
            pool_acquire_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(30),
            read_timeout: Duration::from_secs(60),
            idle_timeout: Duration::from_secs(30),
            follow_redirects: true,
            verify_tls: true,
        }
    }
}

/// Shared pooled transport over `reqwest`. Construct once at startup and
/// hand out clones of the `Arc` it lives in; the pool is the only state the
/// engine shares between concurrent executions.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    in_flight: Arc<Semaphore>,
    /// One limiter per destination, created on first use.
    per_host: Mutex<HashMap<String, Arc<Semaphore>>>,
    max_per_host: usize,
    acquire_timeout: Duration,
}

impl ReqwestHttpClient {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let redirect = if config.follow_redirects {
            reqwest::redirect::Policy::limited(10)
        } else {
            reqwest::redirect::Policy::none()
        };

        let client = reqwest::Client::builder()
            .user_agent(concat!("reqsmith/", env!("CARGO_PKG_VERSION")))
            .redirect(redirect)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            in_flight: Arc::new(Semaphore::new(config.max_in_flight)),
            per_host: Mutex::new(HashMap::new()),
            max_per_host: config.max_per_host,
            acquire_timeout: config.pool_acquire_timeout,
        })
    }

    async fn acquire_slot(
        &self,
        limiter: Arc<Semaphore>,
    ) -> Result<OwnedSemaphorePermit, TransportError> {
        tokio::time::timeout(self.acquire_timeout, limiter.acquire_owned())
            .await
            .map_err(|_| TransportError::PoolExhausted(self.acquire_timeout))?
            .map_err(|e| TransportError::Other(e.to_string()))
    }

    fn host_limiter(&self, url: &url::Url) -> Arc<Semaphore> {
        let key = match (url.host_str(), url.port_or_known_default()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => String::new(),
        };
        let mut hosts = self.per_host.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(
            hosts
                .entry(key)
                .or_insert_with(|| Arc::new(Semaphore::new(self.max_per_host))),
        )
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        // Client creation only fails on a broken TLS backend; if that
        // happens the process cannot do its job at all.
        Self::new(TransportConfig::default()).unwrap_or_else(|e| {
            panic!("failed to create reqwest HTTP client: {e}");
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(
        &self,
        req: TransportRequest,
        timeout: Duration,
    ) -> Result<RawResponse, TransportError> {
        // Bound in-flight requests, overall and per destination host;
        // waiting callers time out rather than queue forever.
        let _total = self.acquire_slot(Arc::clone(&self.in_flight)).await?;
        let _host = self.acquire_slot(self.host_limiter(&req.url)).await?;

        let mut rb = self
            .client
            .request(as_reqwest_method(req.method), req.url)
            .timeout(timeout);

        for (name, value) in req.headers {
            rb = rb.header(name, value);
        }
        if let Some(body) = req.body {
            rb = rb.body(body);
        }

        let resp = rb.send().await.map_err(map_reqwest_error)?;

        let status = resp.status().as_u16();
        let status_text = resp.status().canonical_reason().map(str::to_string);
        let version = Some(format!("{:?}", resp.version()));
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = resp.bytes().await.map_err(map_reqwest_error)?.to_vec();

        Ok(RawResponse {
            status,
            status_text,
            version,
            headers,
            body,
        })
    }
}

fn as_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Head => reqwest::Method::HEAD,
        HttpMethod::Options => reqwest::Method::OPTIONS,
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        return TransportError::Timeout;
    }
    if e.is_connect() || e.is_request() {
        return TransportError::Network(e.to_string());
    }
    TransportError::Other(e.to_string())
}
