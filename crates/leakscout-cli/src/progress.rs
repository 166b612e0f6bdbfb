//! Terminal progress bar for diff collection.

use indicatif::{ProgressBar, ProgressStyle};
use leakscout_core::{CommitRef, FetchProgress};

const TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// One progress bar per phrase, drawn on stderr.
#[derive(Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

impl FetchProgress for BarProgress {
    fn begin(&mut self, phrase: &str, total: usize) {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message(format!("Searching for \"{}\"", phrase));
        self.bar = Some(bar);
    }

    fn advance(&mut self, _commit: &CommitRef) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
