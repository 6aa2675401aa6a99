//! Built-in exclusion lists.
//!
//! These are the patterns applied to every walk before the project's own
//! `.gitignore` is consulted. Grouped by what they exclude so each list stays
//! reviewable on its own.

/// Version-control metadata directories.
pub const VCS_METADATA_EXCLUDES: &[&str] = &[".git", ".hg", ".svn"];

/// Dependency and interpreter-environment directories. Skipping these before
/// descent is what keeps the walk fast on real projects.
pub const DEPENDENCY_DIRECTORY_EXCLUDES: &[&str] = &[
    "node_modules",
    "__pycache__",
    "venv",
    "env",
    ".venv",
    ".ipynb_checkpoints",
];

/// Build and output directories, plus generated packaging metadata.
pub const BUILD_OUTPUT_EXCLUDES: &[&str] = &[
    "build",
    "dist",
    "target",
    ".next",
    "bin",
    "obj",
    "*.egg-info",
];

/// Editor and OS cruft.
pub const EDITOR_OS_CRUFT_EXCLUDES: &[&str] = &[
    ".vscode",
    ".idea",
    ".DS_Store",
    "Thumbs.db",
    "*.pyc",
    "*.swp",
];

/// Path fragments that are ignored unconditionally, even when a project's
/// `.gitignore` says otherwise. Installed editor-extension trees nest deeply
/// enough that descending into them is never useful.
pub const HARD_EXCLUDE_FRAGMENTS: &[&str] = &[
    ".vscode/extensions",
    ".vscode-server/extensions",
    ".cursor/extensions",
];

/// All built-in default patterns, in a stable order.
pub fn default_patterns() -> Vec<&'static str> {
    let mut patterns = Vec::with_capacity(
        VCS_METADATA_EXCLUDES.len()
            + DEPENDENCY_DIRECTORY_EXCLUDES.len()
            + BUILD_OUTPUT_EXCLUDES.len()
            + EDITOR_OS_CRUFT_EXCLUDES.len(),
    );
    patterns.extend(VCS_METADATA_EXCLUDES);
    patterns.extend(DEPENDENCY_DIRECTORY_EXCLUDES);
    patterns.extend(BUILD_OUTPUT_EXCLUDES);
    patterns.extend(EDITOR_OS_CRUFT_EXCLUDES);
    patterns
}

#[cfg(test)]
#[path = "patterns.test.rs"]
mod tests;
