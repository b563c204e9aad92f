//! Generic HTTP transport
//!
//! Thin wrapper around `reqwest` carrying the base URL, default JSON
//! headers, the per-request timeout, and a bounded retry for
//! connect-class transport failures. Error statuses are observed and
//! logged here but never classified: the response flows back to the
//! caller unchanged, and status policy belongs to the validators.
//! [`ApiResponse::ensure_success`] is the explicit opt-in for callers
//! that want an error status to fail.

use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::config::ApiConfig;
use crate::error::{ApiResult, Error};

/// Pause between attempts when a connection cannot be established
const RETRY_BACKOFF: Duration = Duration::from_millis(150);

/// HTTP client bound to a base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
    retry_count: u32,
}

impl HttpClient {
    /// Build a client from the given configuration.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(config.default_headers())
            .build()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry_count: config.retry_count.max(1),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(Method::GET, path, &[], None, None).await
    }

    pub async fn get_query(&self, path: &str, query: &[(&str, String)]) -> ApiResult<ApiResponse> {
        self.send(Method::GET, path, query, None, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        self.send(Method::POST, path, &[], Some(serde_json::to_value(body)?), None)
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        self.send(Method::PUT, path, &[], Some(serde_json::to_value(body)?), None)
            .await
    }

    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<ApiResponse> {
        self.send(Method::PATCH, path, &[], Some(serde_json::to_value(body)?), None)
            .await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(Method::DELETE, path, &[], None, None).await
    }

    /// Issue one logical request. Connect failures are retried up to the
    /// configured attempt budget; timeouts and error statuses are not.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        extra_headers: Option<HeaderMap>,
    ) -> ApiResult<ApiResponse> {
        let url = self.url_for(path);
        let started = Instant::now();
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let mut request = self.inner.request(method.clone(), &url);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(body) = &body {
                request = request.json(body);
            }
            if let Some(headers) = &extra_headers {
                request = request.headers(headers.clone());
            }
            match request.send().await {
                Ok(resp) => {
                    let resp = ApiResponse::read(resp, started, attempts).await?;
                    if !resp.is_success() {
                        warn!(
                            method = %method,
                            url = %url,
                            status = resp.status(),
                            body = %resp.text(),
                            "request answered with error status"
                        );
                    }
                    return Ok(resp);
                }
                Err(e) if e.is_connect() && attempts < self.retry_count => {
                    debug!(url = %url, attempt = attempts, error = %e, "connect failed, retrying");
                    tokio::time::sleep(RETRY_BACKOFF).await;
                }
                Err(e) => {
                    error!(method = %method, url = %url, attempts, error = %e, "request failed");
                    return Err(Error::Transport {
                        attempts,
                        source: e,
                    });
                }
            }
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// A fully received HTTP response: status, headers, body bytes, and the
/// time from dispatch to body receipt.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
    elapsed: Duration,
}

impl ApiResponse {
    async fn read(resp: reqwest::Response, started: Instant, attempts: u32) -> ApiResult<Self> {
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Transport {
                attempts,
                source: e,
            })?;
        Ok(Self {
            status,
            headers,
            body,
            elapsed: started.elapsed(),
        })
    }

    /// Raw status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Raw response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header value, when present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Raw body bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, lossy on invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as a loose JSON value.
    pub fn value(&self) -> ApiResult<serde_json::Value> {
        self.json()
    }

    /// Time from request dispatch to full body receipt.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Turn an error status into [`Error::HttpStatus`]. The transport
    /// itself never raises on status; this is the opt-in.
    pub fn ensure_success(self) -> ApiResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::HttpStatus {
                status: self.status,
                body: self.text(),
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn stub(status: u16, content_type: &str, body: &[u8], elapsed: Duration) -> Self {
        let mut headers = HeaderMap::new();
        if !content_type.is_empty() {
            headers.insert(CONTENT_TYPE, content_type.parse().unwrap());
        }
        Self {
            status,
            headers,
            body: Bytes::copy_from_slice(body),
            elapsed,
        }
    }
}
