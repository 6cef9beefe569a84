use std::path::PathBuf;

use clap::Parser;

/// Case-preserving, multi-variant find & replace across a directory tree.
#[derive(Parser, Debug)]
#[command(name = "swapcase")]
#[command(version)]
#[command(about = "Case-preserving, multi-variant find & replace", long_about = None)]
pub struct Cli {
    /// Glob pattern of paths to search (`**`, `*`, `?`; `~` expands to home).
    pub glob: String,

    /// The term to search for, given in camelCase when multi-word.
    pub needle: String,

    /// The term to substitute in, given in camelCase when multi-word.
    pub replacement: String,

    /// Scan and prompt, but perform no file or path mutation.
    #[arg(long)]
    pub dry: bool,

    /// Skip interactive confirmation; accept every occurrence.
    #[arg(long)]
    pub force: bool,

    /// `|`-separated case-insensitive substrings; matching paths are skipped.
    #[arg(long, default_value = "")]
    pub ignore: String,

    /// Root directory the glob is resolved against. Defaults to the
    /// current directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Disable ANSI coloring even on a terminal.
    #[arg(long)]
    pub no_color: bool,
}
