//! Search, fetch, scan and report, one phrase at a time.
//!
//! Every request is awaited before the next one is issued. Search failures
//! (non-success status) and diff failures degrade the result set; anything
//! else is returned to the caller.

use crate::config::ScoutConfig;
use crate::error::Result;
use crate::models::{CommitRef, FetchedDiff, PhraseResult};
use crate::network::GitHubClient;
use crate::progress::FetchProgress;
use crate::report::Reporter;
use crate::scanner::TermScanner;
use crate::store::{DiffStore, PersistOutcome};
use std::io::Write;
use tracing::{info, warn};

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub phrases: usize,
    pub diffs: usize,
    pub matches: usize,
}

/// The assembled pipeline.
pub struct Scout {
    config: ScoutConfig,
    github: GitHubClient,
    scanner: TermScanner,
    store: Option<DiffStore>,
}

impl Scout {
    /// Validate `config` and build the clients it describes.
    pub fn new(config: ScoutConfig) -> Result<Self> {
        config.validate()?;

        let github = GitHubClient::with_endpoints(config.endpoints.clone())?;
        let scanner = TermScanner::new(config.terms.as_slice(), config.term_mode)?;
        let store = config.output_dir.as_ref().map(DiffStore::new);

        Ok(Self {
            config,
            github,
            scanner,
            store,
        })
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Search `phrase` and fetch the diff of every hit.
    ///
    /// Commits whose diff cannot be fetched are left out. A rejected search
    /// gives an empty result with `searched` unset.
    pub async fn collect_phrase(
        &self,
        phrase: &str,
        progress: &mut dyn FetchProgress,
    ) -> Result<PhraseResult> {
        let Some(commits) = self.github.search_commits(phrase).await? else {
            return Ok(PhraseResult {
                phrase: phrase.to_string(),
                searched: false,
                diffs: Vec::new(),
            });
        };

        progress.begin(phrase, commits.len());
        let mut diffs = Vec::with_capacity(commits.len());
        for commit in commits {
            if let Some(text) = self.fetch_commit(&commit).await {
                diffs.push(FetchedDiff {
                    commit: commit.clone(),
                    text,
                });
            }
            progress.advance(&commit);
        }
        progress.finish();

        Ok(PhraseResult {
            phrase: phrase.to_string(),
            searched: true,
            diffs,
        })
    }

    /// Fetch one diff, persisting it when an output directory is configured.
    ///
    /// Returns `None` when the diff is unavailable or could not be saved.
    pub async fn fetch_commit(&self, commit: &CommitRef) -> Option<String> {
        let url = self.github.diff_url(commit);

        let text = match self.github.fetch_diff(commit).await {
            Ok(text) => text,
            Err(e) => {
                warn!("[!] couldn't reach {}: {}", url, e);
                return None;
            }
        };

        match &self.store {
            None => info!("[+] found {}", url),
            Some(store) => match store.persist(commit, &text) {
                Ok(PersistOutcome::Written(_)) => info!("[+] grabbed {}", url),
                Ok(PersistOutcome::AlreadyPresent(_)) => {
                    info!("[ ] found already existing {}", url)
                }
                Err(e) => {
                    warn!("[!] couldn't save {}: {}", url, e);
                    return None;
                }
            },
        }

        Some(text)
    }

    /// Matched lines across all results: phrases, then commits, then lines.
    pub fn matched_lines<'a>(&self, results: &'a [PhraseResult]) -> Vec<&'a str> {
        results
            .iter()
            .flat_map(|result| result.diffs.iter())
            .flat_map(|diff| self.scanner.scan(&diff.text))
            .collect()
    }

    /// Run every configured phrase, then report all matches.
    pub async fn run<W: Write>(
        &self,
        progress: &mut dyn FetchProgress,
        reporter: &mut Reporter<W>,
    ) -> Result<RunSummary> {
        let mut results = Vec::with_capacity(self.config.queries.len());
        for phrase in &self.config.queries {
            let result = self.collect_phrase(phrase, progress).await?;
            if result.searched {
                reporter.grabbed(result.fetched_count())?;
            }
            results.push(result);
        }

        let lines = self.matched_lines(&results);
        for line in &lines {
            reporter.matched_line(line)?;
        }
        reporter.flush()?;

        Ok(RunSummary {
            phrases: results.len(),
            diffs: results.iter().map(PhraseResult::fetched_count).sum(),
            matches: lines.len(),
        })
    }
}
