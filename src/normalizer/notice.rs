use std::io::{self, Write as _};
use std::path::PathBuf;

use derive_more::Display;
use tracing::debug;
use walkdir::DirEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("dir")]
    Directory,
    #[display("file")]
    File,
}

impl EntryKind {
    /// Symlinks are classified by what they point at but are never descended into.
    pub fn of(entry: &DirEntry) -> Self {
        let file_type = entry.file_type();
        if file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()) {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}

/// A line of user-facing output.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Notice {
    #[display("Renaming {kind}: {from} -> {to}")]
    Renaming {
        kind: EntryKind,
        from: String,
        to: String,
    },
    #[display("Error renaming {}: {}", path.display(), detail)]
    RenameFailed { path: PathBuf, detail: String },
}

pub trait NoticeSink {
    fn notice(&mut self, notice: &Notice);
}

#[derive(Debug, Default)]
pub struct StdoutSink;

impl NoticeSink for StdoutSink {
    fn notice(&mut self, notice: &Notice) {
        if let Err(e) = writeln!(io::stdout().lock(), "{notice}") {
            debug!("Failed to write notice to stdout: {e}");
        }
    }
}

impl NoticeSink for Vec<Notice> {
    fn notice(&mut self, notice: &Notice) {
        self.push(notice.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(EntryKind::Directory, "Renaming dir: U\u{308} -> \u{dc}")]
    #[case(EntryKind::File, "Renaming file: U\u{308} -> \u{dc}")]
    fn renaming_notice_names_the_entry_kind(#[case] kind: EntryKind, #[case] expected: &str) {
        let notice = Notice::Renaming {
            kind,
            from: "U\u{308}".into(),
            to: "\u{dc}".into(),
        };

        assert_eq!(notice.to_string(), expected);
    }

    #[test]
    fn failure_notice_includes_path_and_detail() {
        let notice = Notice::RenameFailed {
            path: PathBuf::from("/srv/assets/cafe\u{301}"),
            detail: "Permission denied (os error 13)".into(),
        };

        assert_eq!(
            notice.to_string(),
            "Error renaming /srv/assets/cafe\u{301}: Permission denied (os error 13)"
        );
    }

    #[test]
    fn vec_sink_keeps_notices_in_order() {
        let first = Notice::Renaming {
            kind: EntryKind::File,
            from: "a".into(),
            to: "b".into(),
        };
        let second = Notice::RenameFailed {
            path: PathBuf::from("c"),
            detail: "d".into(),
        };
        let mut sink: Vec<Notice> = Vec::new();

        sink.notice(&first);
        sink.notice(&second);

        assert_eq!(sink, vec![first, second]);
    }
}
