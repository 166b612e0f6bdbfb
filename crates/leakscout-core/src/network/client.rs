//! HTTP client wrapper.
//!
//! Wraps reqwest with a fixed user agent (GitHub rejects anonymous agents) and
//! reads the GitHub rate limit headers for logging. Responses are returned for
//! every status; only transport failures become errors.

use crate::config::NetworkConfig;
use crate::{Result, ScoutError};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Rate limit state extracted from response headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitState {
    /// Remaining requests allowed.
    pub remaining: Option<u64>,
    /// Total request limit.
    pub limit: Option<u64>,
    /// Unix timestamp when the rate limit resets.
    pub reset: Option<u64>,
}

impl RateLimitState {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
        };

        Self {
            remaining: read("X-RateLimit-Remaining"),
            limit: read("X-RateLimit-Limit"),
            reset: read("X-RateLimit-Reset"),
        }
    }

    /// True when the server reported no requests left in the window.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Get time until rate limit resets.
    pub fn time_until_reset(&self) -> Option<Duration> {
        let reset = self.reset?;
        let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
        (reset > now).then(|| Duration::from_secs(reset - now))
    }
}

/// HTTP client used for both the search API and the diff endpoint.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the default user agent.
    pub fn new() -> Result<Self> {
        Self::with_user_agent(NetworkConfig::USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScoutError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self { client })
    }

    /// Make a GET request.
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.get_with_headers(url, &[]).await
    }

    /// Make a GET request with custom headers.
    pub async fn get_with_headers(&self, url: &str, headers: &[(&str, &str)]) -> Result<Response> {
        let mut request = self.client.get(url);
        for (key, value) in headers {
            request = request.header(*key, *value);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ScoutError::Timeout {
                    url: url.to_string(),
                }
            } else {
                ScoutError::Network {
                    message: format!("GET {} failed: {}", url, e),
                    cause: std::error::Error::source(&e).map(|s| s.to_string()),
                }
            }
        })?;

        let rate_limit = RateLimitState::from_headers(response.headers());
        if let (Some(remaining), Some(limit)) = (rate_limit.remaining, rate_limit.limit) {
            debug!("Rate limit: {}/{}", remaining, limit);
        }

        Ok(response)
    }
}
