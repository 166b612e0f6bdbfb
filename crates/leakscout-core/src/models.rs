//! Commit search payloads and the values the pipeline passes around.

use serde::Deserialize;
use std::fmt;

/// Body of a `GET /search/commits` response.
///
/// Only the fields the pipeline reads are modelled; `items` is required so a
/// body without it is reported as malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<CommitSearchItem>,
}

/// A single commit search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSearchItem {
    pub sha: String,
    pub repository: SearchRepository,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRepository {
    pub full_name: String,
}

/// A commit identified by its repository (`owner/name`) and hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitRef {
    pub repository: String,
    pub hash: String,
}

impl CommitRef {
    pub fn new(repository: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            hash: hash.into(),
        }
    }

    /// File name the diff is persisted under: `{owner}_{name}_{hash}.txt`.
    pub fn diff_file_name(&self) -> String {
        format!("{}_{}.txt", self.repository.replace('/', "_"), self.hash)
    }
}

impl From<CommitSearchItem> for CommitRef {
    fn from(item: CommitSearchItem) -> Self {
        Self {
            repository: item.repository.full_name,
            hash: item.sha,
        }
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.repository, self.hash)
    }
}

/// A diff that was fetched successfully.
#[derive(Debug, Clone)]
pub struct FetchedDiff {
    pub commit: CommitRef,
    pub text: String,
}

/// Everything collected for one search phrase, in search-result order.
#[derive(Debug, Clone)]
pub struct PhraseResult {
    pub phrase: String,
    /// False when the search request itself was rejected.
    pub searched: bool,
    pub diffs: Vec<FetchedDiff>,
}

impl PhraseResult {
    pub fn fetched_count(&self) -> usize {
        self.diffs.len()
    }
}
