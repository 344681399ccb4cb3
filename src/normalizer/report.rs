use std::path::PathBuf;

use derive_more::Display;

use crate::normalizer::RenameError;

#[derive(Debug)]
pub struct RenameFailure {
    pub path: PathBuf,
    pub error: RenameError,
}

/// Outcome of a whole walk; only ever logged, it does not affect the exit status.
#[derive(Debug, Default, Display)]
#[display(
    "{visited} entries visited, {renamed} renamed, {} failed, {skipped} skipped, {unreadable} unreadable",
    failures.len()
)]
pub struct WalkReport {
    pub visited: usize,
    pub renamed: usize,
    /// Entries whose name is not valid UTF-8 and so has no NFC form.
    pub skipped: usize,
    /// Directories or entries the walk could not read.
    pub unreadable: usize,
    pub failures: Vec<RenameFailure>,
}
