//! Progress hooks for diff collection.

use crate::models::CommitRef;

/// Receives progress while the diffs for one phrase are fetched.
pub trait FetchProgress {
    /// Called once the search for `phrase` returned `total` commits.
    fn begin(&mut self, phrase: &str, total: usize);

    /// Called after each commit, whether or not its diff was fetched.
    fn advance(&mut self, commit: &CommitRef);

    fn finish(&mut self);
}

/// Progress sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl FetchProgress for NoProgress {
    fn begin(&mut self, _phrase: &str, _total: usize) {}

    fn advance(&mut self, _commit: &CommitRef) {}

    fn finish(&mut self) {}
}
