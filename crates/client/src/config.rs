//! Client configuration
//!
//! An [`ApiConfig`] is an immutable value built once and passed by
//! reference to client constructors. Nothing reads process globals
//! after construction; `from_env` is the only environment access.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

/// Environment variable overriding the default base URL
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Default base URL of the placeholder API
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default attempt budget for connect-class transport failures
pub const DEFAULT_RETRY_COUNT: u32 = 3;

/// Connection settings for the placeholder API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Per-request timeout, covering connect through body receipt
    pub timeout: Duration,
    /// Total attempts for requests that fail to connect
    pub retry_count: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry_count: DEFAULT_RETRY_COUNT,
        }
    }
}

impl ApiConfig {
    /// Build a configuration, honoring the `API_BASE_URL` override.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Replace the base URL, normalizing away any trailing slash.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Headers attached to every request.
    pub fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}
