//! Ignore patterns for the directory walk.
//!
//! Provides:
//! - **patterns**: the built-in default exclusion lists (version-control
//!   metadata, dependency directories, build output, editor/OS cruft)
//! - **PatternSet**: the effective pattern set for one run, built from the
//!   defaults plus the project's `.gitignore` lines
//!
//! Matching deliberately implements a small ad-hoc subset of gitignore
//! semantics (exact name, leading `*`, leading `/`, directory suffix).
//! Negated patterns and `**` directory globs are out of scope.

mod pattern_set;
pub mod patterns;

pub use pattern_set::IgnorePattern;
pub use pattern_set::PatternSet;
