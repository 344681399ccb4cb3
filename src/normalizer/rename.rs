use std::ffi::OsStr;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu, ensure};

use crate::ext::NfcExt;

/// A name together with the NFC form it should be renamed to. Only built when the two differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDecision {
    pub original: String,
    pub normalized: String,
}

impl RenameDecision {
    pub fn for_name(name: &str) -> Option<Self> {
        name.to_nfc_if_changed().map(|normalized| Self {
            original: name.to_owned(),
            normalized,
        })
    }

    /// Renames `path` in place to the normalized name and returns the new path.
    ///
    /// An existing entry at the target is never replaced, the entry fails instead.
    pub fn apply(&self, path: &Path) -> Result<PathBuf, RenameError> {
        let target = path.with_file_name(OsStr::new(&self.normalized));

        match fs::symlink_metadata(&target) {
            Ok(target_metadata) => {
                let source_metadata = fs::symlink_metadata(path).context(IoSnafu)?;
                let distinct = !is_same_entry(&source_metadata, &target_metadata)
                    || parent_lists_name(path, &self.normalized).context(IoSnafu)?;
                ensure!(!distinct, TargetExistsSnafu { target });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).context(IoSnafu),
        }

        fs::rename(path, &target).context(IoSnafu)?;
        Ok(target)
    }
}

/// Hard links share an inode too, so an exact match in the listing means the target
/// is its own directory entry and `rename(2)` would silently do nothing.
fn parent_lists_name(path: &Path, name: &str) -> io::Result<bool> {
    let Some(parent) = path.parent() else {
        return Ok(false);
    };
    for entry in fs::read_dir(parent)? {
        if entry?.file_name() == OsStr::new(name) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Normalization-insensitive filesystems resolve the target name to the source entry itself.
#[cfg(unix)]
fn is_same_entry(a: &Metadata, b: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;

    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn is_same_entry(_a: &Metadata, _b: &Metadata) -> bool {
    false
}

#[derive(Debug, Snafu)]
pub enum RenameError {
    #[snafu(display("target {} already exists", target.display()))]
    TargetExists { target: PathBuf },
    #[snafu(display("{source}"))]
    Io { source: io::Error },
}
