use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Renames files and directories under a tree to their Unicode NFC names.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory whose contents are normalized; the directory itself is left as is
    pub root: PathBuf,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
