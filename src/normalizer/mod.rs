//! Bottom-up renaming of directory entries to their Unicode NFC names.
//!
//! The walker visits every entry below a root, children before their parent,
//! and renames those whose name changes under NFC. Failures are reported per
//! entry through a [`NoticeSink`] and never stop the walk.

mod notice;
mod rename;
mod report;
mod walker;

pub use notice::{EntryKind, Notice, NoticeSink, StdoutSink};
pub use rename::{RenameDecision, RenameError};
pub use report::{RenameFailure, WalkReport};
pub use walker::{WalkError, normalize_tree};
