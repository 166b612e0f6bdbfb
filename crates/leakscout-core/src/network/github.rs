//! GitHub commit search and diff retrieval.
//!
//! Provides:
//! - Commit search (first results page only, no backoff)
//! - Raw `.diff` retrieval per commit

use crate::config::{Endpoints, NetworkConfig};
use crate::models::{CommitRef, CommitSearchResponse};
use crate::network::client::{HttpClient, RateLimitState};
use crate::{Result, ScoutError};
use tracing::{debug, info, warn};

/// Encode a phrase for the `q=` parameter: words percent-encoded, joined by `+`.
pub fn encode_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("+")
}

/// GitHub API client.
pub struct GitHubClient {
    http: HttpClient,
    endpoints: Endpoints,
}

impl GitHubClient {
    /// Create a client against the public GitHub endpoints.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self> {
        Ok(Self::from_parts(HttpClient::new()?, endpoints))
    }

    pub fn from_parts(http: HttpClient, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn search_url(&self, phrase: &str) -> String {
        format!("{}?q={}", self.endpoints.search_url, encode_phrase(phrase))
    }

    pub fn diff_url(&self, commit: &CommitRef) -> String {
        format!(
            "{}/{}/commit/{}.diff",
            self.endpoints.diff_base.trim_end_matches('/'),
            commit.repository,
            commit.hash
        )
    }

    /// Search commit messages for `phrase`.
    ///
    /// A non-success status is logged and yields `None`, which callers treat
    /// as an empty result. Transport errors and malformed bodies are returned
    /// as errors.
    pub async fn search_commits(&self, phrase: &str) -> Result<Option<Vec<CommitRef>>> {
        let url = self.search_url(phrase);
        info!("searching: {}", url);

        let response = self
            .http
            .get_with_headers(&url, &[("Accept", NetworkConfig::GITHUB_ACCEPT)])
            .await?;
        let status = response.status();

        if !status.is_success() {
            let rate_limit = RateLimitState::from_headers(response.headers());
            warn!("Request failed with status code {}", status.as_u16());
            if rate_limit.is_exhausted() {
                if let Some(wait) = rate_limit.time_until_reset() {
                    warn!("GitHub rate limit exhausted, resets in {}s", wait.as_secs());
                }
            }
            let body = response.text().await.unwrap_or_default();
            debug!("{}", body);
            return Ok(None);
        }

        let body = response.text().await?;
        let parsed: CommitSearchResponse =
            serde_json::from_str(&body).map_err(|e| ScoutError::Json {
                message: format!("Failed to parse commit search response: {}", e),
                source: Some(e),
            })?;

        if parsed.incomplete_results {
            debug!("GitHub reported incomplete results for {:?}", phrase);
        }

        let commits: Vec<CommitRef> = parsed.items.into_iter().map(CommitRef::from).collect();
        debug!("Search for {:?} returned {} commits", phrase, commits.len());
        Ok(Some(commits))
    }

    /// Fetch the unified diff of `commit`.
    ///
    /// Fails with `Network`/`Timeout` when the request could not complete and
    /// with `GitHubApi` carrying the status for non-2xx answers.
    pub async fn fetch_diff(&self, commit: &CommitRef) -> Result<String> {
        let url = self.diff_url(commit);
        let response = self.http.get(&url).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScoutError::GitHubApi {
                message: format!("GET {} returned {}", url, status),
                status_code: Some(status.as_u16()),
            });
        }

        Ok(response.text().await?)
    }
}
