//! Centralized configuration for leakscout.
//!
//! Constants for the GitHub endpoints and search defaults, plus [`ScoutConfig`],
//! the run configuration built once at startup and read-only afterwards.

use crate::error::{Result, ScoutError};
use std::path::PathBuf;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const GITHUB_API_BASE: &'static str = "https://api.github.com";
    pub const GITHUB_WEB_BASE: &'static str = "https://github.com";
    pub const COMMIT_SEARCH_PATH: &'static str = "/search/commits";
    pub const USER_AGENT: &'static str = "leakscout/0.1";
    pub const GITHUB_ACCEPT: &'static str = "application/vnd.github.v3+json";
}

/// Defaults used when the user supplies no phrases or terms.
pub struct SearchDefaults;

impl SearchDefaults {
    pub const QUERIES: [&'static str; 3] = ["deleted .env", "delete .env", "hide .env"];
    pub const TERMS: [&'static str; 1] = ["mongodb"];
}

/// How scan terms are turned into a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TermMode {
    /// Terms are matched as literal substrings.
    #[default]
    Literal,
    /// Terms are spliced into the alternation unescaped.
    Regex,
}

/// Base URLs for the two HTTP boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Full URL of the commit search endpoint, without query string.
    pub search_url: String,
    /// Base the per-commit `{repo}/commit/{sha}.diff` path is appended to.
    pub diff_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search_url: format!(
                "{}{}",
                NetworkConfig::GITHUB_API_BASE,
                NetworkConfig::COMMIT_SEARCH_PATH
            ),
            diff_base: NetworkConfig::GITHUB_WEB_BASE.to_string(),
        }
    }
}

impl Endpoints {
    /// Point both boundaries at a single host, e.g. a local stub server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            search_url: format!("{}{}", base, NetworkConfig::COMMIT_SEARCH_PATH),
            diff_base: base.to_string(),
        }
    }
}

/// Configuration for one leakscout run.
///
/// # Example
///
/// ```rust,ignore
/// let config = ScoutConfig::new(vec!["deleted .env".into()], vec!["mongodb".into()])
///     .with_output_dir("./diffs")
///     .verbose(true);
/// config.validate()?;
/// ```
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    pub queries: Vec<String>,
    pub terms: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub verbose: bool,
    pub term_mode: TermMode,
    pub endpoints: Endpoints,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self::new(
            SearchDefaults::QUERIES.iter().map(|q| q.to_string()).collect(),
            SearchDefaults::TERMS.iter().map(|t| t.to_string()).collect(),
        )
    }
}

impl ScoutConfig {
    pub fn new(queries: Vec<String>, terms: Vec<String>) -> Self {
        Self {
            queries,
            terms,
            output_dir: None,
            verbose: false,
            term_mode: TermMode::default(),
            endpoints: Endpoints::default(),
        }
    }

    /// Persist fetched diffs into `dir`. The directory must already exist.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn verbose(mut self, enable: bool) -> Self {
        self.verbose = enable;
        self
    }

    pub fn with_term_mode(mut self, mode: TermMode) -> Self {
        self.term_mode = mode;
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Check the configuration before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.queries.is_empty() {
            return Err(ScoutError::Config {
                message: "at least one search phrase is required".to_string(),
            });
        }

        for (name, value) in [
            ("search endpoint", &self.endpoints.search_url),
            ("diff endpoint", &self.endpoints.diff_base),
        ] {
            url::Url::parse(value).map_err(|e| ScoutError::Config {
                message: format!("invalid {} {:?}: {}", name, value, e),
            })?;
        }

        if let Some(dir) = &self.output_dir {
            if !dir.exists() {
                return Err(ScoutError::Config {
                    message: format!("output directory {} does not exist", dir.display()),
                });
            }
            if !dir.is_dir() {
                return Err(ScoutError::NotADirectory(dir.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ScoutConfig::default();
        assert_eq!(config.queries, vec!["deleted .env", "delete .env", "hide .env"]);
        assert_eq!(config.terms, vec!["mongodb"]);
        assert!(config.output_dir.is_none());
        assert!(!config.verbose);
        assert_eq!(config.term_mode, TermMode::Literal);
        assert_eq!(
            config.endpoints.search_url,
            "https://api.github.com/search/commits"
        );
        assert_eq!(config.endpoints.diff_base, "https://github.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoints_with_base() {
        let endpoints = Endpoints::with_base("http://127.0.0.1:8080/");
        assert_eq!(endpoints.search_url, "http://127.0.0.1:8080/search/commits");
        assert_eq!(endpoints.diff_base, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_validate_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = ScoutConfig::default().with_output_dir(temp_dir.path());
        assert!(config.validate().is_ok());

        let missing = ScoutConfig::default().with_output_dir(temp_dir.path().join("missing"));
        assert!(matches!(missing.validate(), Err(ScoutError::Config { .. })));

        let file_path = temp_dir.path().join("file.txt");
        std::fs::write(&file_path, "x").unwrap();
        let file = ScoutConfig::default().with_output_dir(&file_path);
        assert!(matches!(file.validate(), Err(ScoutError::NotADirectory(_))));
    }

    #[test]
    fn test_validate_rejects_empty_queries_and_bad_endpoints() {
        let config = ScoutConfig::new(vec![], vec!["mongodb".into()]);
        assert!(matches!(config.validate(), Err(ScoutError::Config { .. })));

        let config = ScoutConfig::default().with_endpoints(Endpoints {
            search_url: "not a url".into(),
            diff_base: "https://github.com".into(),
        });
        assert!(matches!(config.validate(), Err(ScoutError::Config { .. })));
    }
}
