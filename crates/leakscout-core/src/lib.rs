//! leakscout core - find commits that removed secrets and scan their diffs.
//!
//! The pipeline searches GitHub commit messages for each phrase, fetches the
//! diff of every hit, optionally saves it to disk and prints the diff lines
//! that contain one of the configured terms.
//!
//! # Example
//!
//! ```rust,ignore
//! use leakscout_core::{NoProgress, Reporter, Scout, ScoutConfig};
//!
//! #[tokio::main]
//! async fn main() -> leakscout_core::Result<()> {
//!     let scout = Scout::new(ScoutConfig::default())?;
//!     let mut reporter = Reporter::new(std::io::stdout());
//!     let summary = scout.run(&mut NoProgress, &mut reporter).await?;
//!     println!("{} matching lines", summary.matches);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod scanner;
pub mod store;

// Re-export commonly used types
pub use config::{Endpoints, ScoutConfig, SearchDefaults, TermMode};
pub use error::{Result, ScoutError};
pub use models::{CommitRef, FetchedDiff, PhraseResult};
pub use network::GitHubClient;
pub use pipeline::{RunSummary, Scout};
pub use progress::{FetchProgress, NoProgress};
pub use report::Reporter;
pub use scanner::TermScanner;
pub use store::{DiffStore, PersistOutcome};
