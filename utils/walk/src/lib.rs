//! Pre-order directory walk with ignore-pattern pruning.
//!
//! [`Walker`] lazily yields the filtered contents of a directory tree:
//! parents before children, directories before files among siblings, names
//! compared case-insensitively within each group. The pattern set is
//! consulted *before* descending, so an ignored directory contributes
//! nothing — its subtree is pruned, not post-filtered.
//!
//! Failures local to one subtree (an unreadable directory) surface as
//! [`WalkEvent::Denied`] and never abort the remainder of the walk; a
//! failure on a single entry drops that entry and keeps its siblings. Only
//! a root that cannot be resolved is fatal.
//!
//! Symlinked directories are followed and cycles are not detected; a
//! self-referential symlink can recurse without bound. Known boundary
//! condition, accepted for a tool that walks ordinary project trees.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use seetree_file_ignore::PatternSet;

/// A single filesystem node produced by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Absolute (caller-rooted) path of the entry.
    pub path: PathBuf,
    /// `/`-separated path from the walk root, used for pattern matching and
    /// status lookups.
    pub rel_path: String,
    /// Final path component.
    pub name: String,
    pub is_dir: bool,
    /// 0 for entries directly under the walk root.
    pub depth: usize,
    /// True when this entry is the last of its filtered, sorted siblings.
    pub is_last: bool,
}

/// One step of the walk: an entry, or an inline report that a subtree could
/// not be read.
#[derive(Debug)]
pub enum WalkEvent {
    Entry(TreeEntry),
    /// `path` is the directory whose children could not be listed; `depth`
    /// is the depth those children would have had.
    Denied { depth: usize, path: PathBuf },
}

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Lazy pre-order iterator over a filtered directory tree.
///
/// Non-restartable; construct a new walker to traverse again.
pub struct Walker<'a> {
    patterns: &'a PatternSet,
    stack: Vec<std::vec::IntoIter<WalkEvent>>,
}

impl<'a> Walker<'a> {
    /// Start a walk at `root`. Fails only when `root` does not exist or is
    /// not a directory; an unreadable root is reported inline as a single
    /// [`WalkEvent::Denied`].
    pub fn new(root: &Path, patterns: &'a PatternSet) -> Result<Self, WalkError> {
        if !root.is_dir() {
            return Err(WalkError::RootNotFound(root.to_path_buf()));
        }
        let first = match list_children(root, "", 0, patterns) {
            Ok(children) => children.into_iter().map(WalkEvent::Entry).collect(),
            Err(err) => {
                tracing::warn!("cannot read walk root {}: {err}", root.display());
                vec![WalkEvent::Denied {
                    depth: 0,
                    path: root.to_path_buf(),
                }]
            }
        };
        Ok(Self {
            patterns,
            stack: vec![first.into_iter()],
        })
    }
}

/// Start a walk at `root` with the given pattern set.
pub fn walk<'a>(root: &Path, patterns: &'a PatternSet) -> Result<Walker<'a>, WalkError> {
    Walker::new(root, patterns)
}

impl Iterator for Walker<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(event) = frame.next() else {
                self.stack.pop();
                continue;
            };

            if let WalkEvent::Entry(entry) = &event
                && entry.is_dir
            {
                // Descend before the next sibling; pushing the child frame
                // now keeps the traversal pre-order.
                let child_depth = entry.depth + 1;
                let children = match list_children(
                    &entry.path,
                    &entry.rel_path,
                    child_depth,
                    self.patterns,
                ) {
                    Ok(children) => children.into_iter().map(WalkEvent::Entry).collect(),
                    Err(err) => {
                        tracing::debug!("cannot read {}: {err}", entry.path.display());
                        vec![WalkEvent::Denied {
                            depth: child_depth,
                            path: entry.path.clone(),
                        }]
                    }
                };
                self.stack.push(children.into_iter());
            }

            return Some(event);
        }
    }
}

/// List, filter, and order the immediate children of one directory.
fn list_children(
    dir: &Path,
    rel_dir: &str,
    depth: usize,
    patterns: &PatternSet,
) -> io::Result<Vec<TreeEntry>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        // A failure on one entry drops that entry only; the rest of the
        // listing survives.
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                tracing::debug!("skipping {}: {err}", entry.path().display());
                continue;
            }
        };
        let is_dir = if file_type.is_symlink() {
            fs::metadata(entry.path())
                .map(|meta| meta.is_dir())
                .unwrap_or(false)
        } else {
            file_type.is_dir()
        };

        let rel_path = if rel_dir.is_empty() {
            name.clone()
        } else {
            format!("{rel_dir}/{name}")
        };

        if patterns.is_ignored(&name, &rel_path, is_dir) {
            tracing::trace!("pruned {rel_path}");
            continue;
        }

        children.push(TreeEntry {
            path: entry.path(),
            rel_path,
            name,
            is_dir,
            depth,
            is_last: false,
        });
    }

    // Directories first, then case-insensitive name order within each group.
    children.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    if let Some(last) = children.last_mut() {
        last.is_last = true;
    }
    Ok(children)
}

#[cfg(test)]
#[path = "lib.test.rs"]
mod tests;
