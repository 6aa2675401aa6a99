//! Porcelain short-status parsing.

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

/// Status of one path, condensed from the two-character porcelain code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Modified,
    Added,
    Deleted,
    Renamed,
    Untracked,
    Conflicted,
}

impl FileStatus {
    /// Short marker shown next to an annotated entry.
    pub fn code(self) -> &'static str {
        match self {
            FileStatus::Modified => "M",
            FileStatus::Added => "A",
            FileStatus::Deleted => "D",
            FileStatus::Renamed => "R",
            FileStatus::Untracked => "??",
            FileStatus::Conflicted => "U",
        }
    }
}

/// Capability interface consumed by the renderer. Keeps process spawning out
/// of the rendering path.
pub trait StatusProvider {
    /// Status for a `/`-separated path relative to the walk root, if any.
    fn lookup(&self, rel_path: &str) -> Option<FileStatus>;
}

/// Provider with no information for any path. Used when the status overlay
/// is disabled or unavailable.
#[derive(Debug, Default)]
pub struct EmptyStatus;

impl StatusProvider for EmptyStatus {
    fn lookup(&self, _rel_path: &str) -> Option<FileStatus> {
        None
    }
}

/// Path → status mapping from one `git status --porcelain` run.
#[derive(Debug, Default)]
pub struct GitStatus {
    entries: HashMap<String, FileStatus>,
}

impl GitStatus {
    /// Run `git status --porcelain` under `root`. Any failure (not a
    /// repository, git missing, non-zero exit) yields an empty mapping.
    pub fn load(root: &Path) -> Self {
        let output = Command::new("git")
            .arg("-C")
            .arg(root)
            .args(["status", "--porcelain"])
            .output();
        match output {
            Ok(output) if output.status.success() => {
                Self::parse_porcelain(&String::from_utf8_lossy(&output.stdout))
            }
            Ok(output) => {
                tracing::debug!("git status exited with {}; no overlay", output.status);
                Self::default()
            }
            Err(err) => {
                tracing::debug!("git unavailable: {err}; no overlay");
                Self::default()
            }
        }
    }

    /// Parse porcelain short-status lines: two status characters, a space,
    /// then the path. Rename lines keep the right-hand path; the trailing
    /// `/` git prints for untracked directories is stripped so directory
    /// lookups hit.
    pub fn parse_porcelain(text: &str) -> Self {
        let mut entries = HashMap::new();
        for line in text.lines() {
            let (Some(code), Some(path)) = (line.get(..2), line.get(3..)) else {
                continue;
            };
            let mut chars = code.chars();
            let (Some(index), Some(worktree)) = (chars.next(), chars.next()) else {
                continue;
            };
            let Some(status) = classify_code(index, worktree) else {
                continue;
            };

            let path = match path.rsplit_once(" -> ") {
                Some((_, renamed_to)) => renamed_to,
                None => path,
            };
            let path = path.trim_matches('"').trim_end_matches('/');
            if path.is_empty() {
                continue;
            }
            entries.insert(path.to_string(), status);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatusProvider for GitStatus {
    fn lookup(&self, rel_path: &str) -> Option<FileStatus> {
        self.entries.get(rel_path).copied()
    }
}

fn classify_code(index: char, worktree: char) -> Option<FileStatus> {
    match (index, worktree) {
        ('?', '?') => Some(FileStatus::Untracked),
        ('U', _) | (_, 'U') | ('A', 'A') | ('D', 'D') => Some(FileStatus::Conflicted),
        ('R', _) | (_, 'R') => Some(FileStatus::Renamed),
        ('D', _) | (_, 'D') => Some(FileStatus::Deleted),
        ('A', _) => Some(FileStatus::Added),
        ('M', _) | (_, 'M') | ('T', _) | (_, 'T') => Some(FileStatus::Modified),
        _ => None,
    }
}

#[cfg(test)]
#[path = "status.test.rs"]
mod tests;
