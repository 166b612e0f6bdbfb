//! leakscout - search GitHub for commits that removed secrets.
//!
//! Searches commit messages for each phrase, fetches every hit's diff and
//! prints the diff lines containing one of the terms. Matches go to stdout;
//! logs and the progress bar go to stderr.

mod progress;

use anyhow::Result;
use clap::Parser;
use leakscout_core::{NoProgress, Reporter, Scout, ScoutConfig, SearchDefaults, TermMode};
use progress::BarProgress;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "leakscout")]
#[command(about = "Find commits that removed secrets and scan their diffs")]
struct Args {
    /// Commit message phrases to search for
    #[arg(short, long, num_args = 1.., default_values = SearchDefaults::QUERIES)]
    query: Vec<String>,

    /// Terms to look for in the diffs (case sensitive)
    #[arg(short, long, num_args = 1.., default_values = SearchDefaults::TERMS)]
    terms: Vec<String>,

    /// Directory to save fetched diffs into (must exist)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Treat terms as regular expressions instead of literal text
    #[arg(long)]
    regex: bool,
}

impl Args {
    fn into_config(self) -> ScoutConfig {
        let mode = if self.regex {
            TermMode::Regex
        } else {
            TermMode::Literal
        };

        let config = ScoutConfig::new(self.query, self.terms)
            .verbose(self.verbose)
            .with_term_mode(mode);

        match self.output {
            Some(dir) => config.with_output_dir(dir),
            None => config,
        }
    }
}

fn init_logging(verbose: bool) {
    // Absorbed failures are logged at warn, so they only show up with -v
    let directives = if verbose {
        "warn,leakscout=debug,leakscout_core=debug"
    } else {
        "error"
    };

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(directives))
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().into_config();
    init_logging(config.verbose);

    info!(
        "Searching {} phrase(s) for {} term(s)",
        config.queries.len(),
        config.terms.len()
    );

    let scout = Scout::new(config)?;
    let mut reporter = Reporter::new(std::io::stdout());

    let summary = if scout.config().verbose {
        scout.run(&mut NoProgress, &mut reporter).await?
    } else {
        scout.run(&mut BarProgress::default(), &mut reporter).await?
    };

    debug!(
        "Done: {} phrases, {} diffs, {} matching lines",
        summary.phrases, summary.diffs, summary.matches
    );

    Ok(())
}
