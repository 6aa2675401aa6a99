//! Static ANSI style table.
//!
//! One escape sequence per semantic category; no runtime state. The reset
//! code is appended by the renderer after every styled span.

use seetree_git_status::FileStatus;

pub const RESET: &str = "\x1b[0m";

/// Semantic display category of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Folder,
    Config,
    Python,
    Rust,
    Docs,
    Json,
    Lock,
    Image,
    Npm,
    Html,
    Css,
    Js,
    Ts,
    Yaml,
    Sql,
    Csv,
    Shell,
    Default,
}

impl Style {
    pub fn ansi(self) -> &'static str {
        match self {
            Style::Folder => "\x1b[1;34m",     // bold blue
            Style::Config => "\x1b[1;33m",     // bold yellow
            Style::Python => "\x1b[1;32m",     // bold green
            Style::Rust => "\x1b[38;5;166m",   // rust orange
            Style::Docs => "\x1b[1;36m",       // bold cyan
            Style::Json => "\x1b[1;35m",       // bold magenta
            Style::Lock => "\x1b[1;31m",       // bold red
            Style::Image => "\x1b[38;5;213m",  // pink
            Style::Npm => "\x1b[38;5;208m",    // orange
            Style::Html => "\x1b[38;5;202m",   // deep orange
            Style::Css => "\x1b[38;5;39m",     // light blue
            Style::Js => "\x1b[38;5;220m",     // gold
            Style::Ts => "\x1b[38;5;45m",      // turquoise
            Style::Yaml => "\x1b[38;5;177m",   // purple
            Style::Sql => "\x1b[38;5;147m",    // light purple
            Style::Csv => "\x1b[38;5;107m",    // olive
            Style::Shell => "\x1b[38;5;71m",   // green
            Style::Default => RESET,
        }
    }
}

/// Color for a status marker.
pub fn status_ansi(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Modified => "\x1b[1;33m",
        FileStatus::Added => "\x1b[1;32m",
        FileStatus::Deleted | FileStatus::Conflicted => "\x1b[1;31m",
        FileStatus::Renamed => "\x1b[1;36m",
        FileStatus::Untracked => "\x1b[2;37m",
    }
}
