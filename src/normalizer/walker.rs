use std::fs;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::normalizer::{
    EntryKind, Notice, NoticeSink, RenameDecision, RenameFailure, WalkReport,
};

/// Renames every entry below `root` whose name is not NFC, children before their parent.
///
/// The root itself keeps its name. Per-entry failures are reported through `sink`
/// and collected in the returned report; only an unusable root is an error.
pub fn normalize_tree(
    root: &Path,
    sink: &mut impl NoticeSink,
) -> Result<WalkReport, WalkError> {
    let metadata = fs::metadata(root).context(RootUnavailableSnafu {
        path: root.to_path_buf(),
    })?;
    ensure!(
        metadata.is_dir(),
        RootNotDirectorySnafu {
            path: root.to_path_buf(),
        }
    );

    debug!("Walking {}", root.display());
    let mut report = WalkReport::default();

    // Sorting makes walkdir read each directory completely before yielding from it,
    // so renames never race the directory listing they came from. Directories sort
    // ahead of files at every level.
    let entries = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .contents_first(true)
        .sort_by(|a, b| {
            b.file_type()
                .is_dir()
                .cmp(&a.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });

    for entry in entries {
        match entry {
            Ok(entry) => normalize_entry(&entry, sink, &mut report),
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                report.unreadable += 1;
            }
        }
    }

    Ok(report)
}

fn normalize_entry(entry: &DirEntry, sink: &mut impl NoticeSink, report: &mut WalkReport) {
    let path = entry.path();
    let Some(name) = entry.file_name().to_str() else {
        warn!("Skipping {}: name is not valid UTF-8", path.display());
        report.skipped += 1;
        return;
    };
    report.visited += 1;

    let Some(decision) = RenameDecision::for_name(name) else {
        return;
    };

    sink.notice(&Notice::Renaming {
        kind: EntryKind::of(entry),
        from: decision.original.clone(),
        to: decision.normalized.clone(),
    });

    match decision.apply(path) {
        Ok(target) => {
            debug!("Renamed {} to {}", path.display(), target.display());
            report.renamed += 1;
        }
        Err(error) => {
            sink.notice(&Notice::RenameFailed {
                path: path.to_path_buf(),
                detail: error.to_string(),
            });
            report.failures.push(RenameFailure {
                path: path.to_path_buf(),
                error,
            });
        }
    }
}

#[derive(Debug, Snafu)]
pub enum WalkError {
    #[snafu(display("Cannot access root directory {}", path.display()))]
    RootUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Root {} is not a directory", path.display()))]
    RootNotDirectory { path: PathBuf },
}
