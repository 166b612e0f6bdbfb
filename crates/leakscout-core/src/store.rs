//! On-disk persistence of fetched diffs.
//!
//! Files are created only if absent. Presence is the sole deduplication: an
//! existing file is never compared, refreshed or rewritten.

use crate::error::{Result, ScoutError};
use crate::models::CommitRef;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

/// What happened when a diff was handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Written(PathBuf),
    AlreadyPresent(PathBuf),
}

/// Writes diffs into an existing output directory.
#[derive(Debug, Clone)]
pub struct DiffStore {
    dir: PathBuf,
}

impl DiffStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, commit: &CommitRef) -> PathBuf {
        self.dir.join(commit.diff_file_name())
    }

    /// Write `text` for `commit` unless a file for it already exists.
    pub fn persist(&self, commit: &CommitRef, text: &str) -> Result<PersistOutcome> {
        let path = self.path_for(commit);
        if path.exists() {
            return Ok(PersistOutcome::AlreadyPresent(path));
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            // Lost a race with another writer
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Ok(PersistOutcome::AlreadyPresent(path));
            }
            Err(e) => return Err(ScoutError::io_with_path(e, path)),
        };

        file.write_all(text.as_bytes())
            .map_err(|e| ScoutError::io_with_path(e, &path))?;

        Ok(PersistOutcome::Written(path))
    }
}
